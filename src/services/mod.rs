//! Validated operations over journal state. Services are stateless; the
//! manager owns persistence.

pub mod category_service;
pub mod record_service;

pub use category_service::CategoryService;
pub use record_service::RecordService;

use crate::errors::JournalError;

pub type ServiceResult<T> = Result<T, JournalError>;
