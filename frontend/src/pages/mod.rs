//! Routed pages.

pub mod admin;
pub mod articles;
pub mod contact;
pub mod home;
pub mod info;
pub mod payment;
pub mod registration;
pub mod test;

pub use admin::{AdminLoginPage, AdminTeamPage};
pub use articles::{ArticleDetailPage, ArticlesPage};
pub use contact::ContactPage;
pub use home::HomePage;
pub use info::{CompanyProfilePage, NewmeTestPage, NotFoundPage, PrivacyPolicyPage};
pub use payment::PaymentRoute;
pub use registration::RegistrationPage;
pub use test::{LastResult, PersonalityTestsPage, ResultPage, TestPage};
