// Services layer - Business logic and orchestration
pub mod dispatcher;
pub mod emails;
pub mod lifecycle;
pub mod mailer;
pub mod token_service;

pub use dispatcher::NotificationDispatcher;
pub use lifecycle::{RequestLifecycleManager, TransitionOutcome};
pub use mailer::{EmailClient, LogOnlyMailer, ResendClient};
pub use token_service::TokenService;
