pub mod create_record;
pub mod delete_record;
pub mod get_records;
pub mod update_record;

pub use create_record::CreateDnsRecordUseCase;
pub use delete_record::DeleteDnsRecordUseCase;
pub use get_records::GetDnsRecordsUseCase;
pub use update_record::UpdateDnsRecordUseCase;
