//! User domain entities.

pub mod email;
pub mod model;
pub mod profile;
pub mod record;
pub mod social;

pub use email::EmailAddress;
pub use model::User;
pub use profile::UserProfile;
pub use record::UserRecord;
pub use social::SocialAccount;
