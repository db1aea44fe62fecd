use axum::Json;
use serde_json::{json, Value};

/// Static endpoint catalog for quick API discovery.
pub async fn api_docs() -> Json<Value> {
    Json(json!({
        "apiVersion": "1.0",
        "endpoints": [
            { "path": "/api/health", "method": "GET", "description": "Health check endpoint" },
            { "path": "/api/db/status", "method": "GET", "description": "Check database connection status" },
            { "path": "/api/db/stats", "method": "GET", "description": "Get database statistics" },
            { "path": "/api/auth/register", "method": "POST", "description": "Register a new user" },
            { "path": "/api/auth/login", "method": "POST", "description": "Login user" },
            { "path": "/api/auth/github", "method": "GET", "description": "GitHub OAuth login" },
            { "path": "/api/auth/google", "method": "GET", "description": "Google OAuth login" },
            { "path": "/api/auth/me", "method": "GET", "description": "Get current user" },
            { "path": "/api/auth/logout", "method": "POST", "description": "Logout user" },
            { "path": "/api/dns/records", "method": "GET", "description": "Get all DNS records" },
            { "path": "/api/dns/records/{id}", "method": "GET", "description": "Get a specific DNS record" },
            { "path": "/api/dns/records", "method": "POST", "description": "Create a new DNS record" },
            { "path": "/api/dns/records/{id}", "method": "PUT", "description": "Update a DNS record" },
            { "path": "/api/dns/records/{id}", "method": "DELETE", "description": "Delete a DNS record" },
            { "path": "/api/dns/status/{domain}", "method": "GET", "description": "Domain status snapshot (mock by default, live=true for a real lookup)" },
            { "path": "/api/repositories", "method": "GET", "description": "Get all repositories" },
            { "path": "/api/repositories/sync", "method": "POST", "description": "Sync repositories from GitHub" },
            { "path": "/api/personal", "method": "GET", "description": "Get personal information" }
        ]
    }))
}
