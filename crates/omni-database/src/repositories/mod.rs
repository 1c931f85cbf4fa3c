//! Concrete repository implementations.

pub mod event;
pub mod notification;
pub mod professional;
pub mod report;
pub mod user;

pub use event::EventRepository;
pub use notification::NotificationRepository;
pub use professional::ProfessionalRepository;
pub use report::ReportRepository;
pub use user::UserRepository;
