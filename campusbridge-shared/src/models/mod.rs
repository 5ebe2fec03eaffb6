pub mod content;
pub mod course;
pub mod errors;
pub mod payment;
pub mod response;
pub mod user;

pub use content::{BlogPost, Internship};
pub use course::{Course, CourseCategory, CourseFilter, EnrollResponse};
pub use errors::ErrorResponse;
pub use payment::{
    CreateOrderRequest, LineItem, PaymentOrder, PaymentResult, VerifyPaymentRequest,
    VerifyPaymentResponse,
};
pub use response::ApiResponse;
pub use user::{LoginRequest, LoginResponse, Profile, UpdateProfileRequest, UserRole};
