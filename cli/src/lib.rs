pub mod editor;
pub mod grab;
pub mod logger;
pub mod notify;
pub mod preferences;
