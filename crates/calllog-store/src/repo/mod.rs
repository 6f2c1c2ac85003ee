pub mod calls;
pub mod view_params;

pub use calls::CallsRepo;
pub use view_params::ViewParamsRepo;
