pub mod admin_dashboard;
pub mod beneficiaries;
pub mod beneficiary_dashboard;
pub mod dashboard;
pub mod owner_dashboard;
pub mod promotions_moderation;

pub use admin_dashboard::AdminDashboard;
pub use beneficiaries::BeneficiariesPage;
pub use beneficiary_dashboard::BeneficiaryDashboard;
pub use dashboard::Dashboard;
pub use owner_dashboard::OwnerDashboard;
pub use promotions_moderation::PromotionsModerationPage;
