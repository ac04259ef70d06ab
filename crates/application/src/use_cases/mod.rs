pub mod interception;

pub use interception::InterceptRequestUseCase;
