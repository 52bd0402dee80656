mod adapter;
mod remote_control;
mod subject;

pub use adapter::Adapter;
pub use remote_control::RemoteControl;
pub use subject::Subject;
