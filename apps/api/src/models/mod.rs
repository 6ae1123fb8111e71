pub mod academic;
pub mod dashboard;
pub mod notification;
pub mod request;
pub mod timetable;
pub mod user;
