mod intercept_request;

pub use intercept_request::InterceptRequestUseCase;
