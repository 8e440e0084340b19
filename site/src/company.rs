//! Company facts shown in the chrome and on several pages.

pub const NAME: &str = "JEIL Packaging";
pub const TAGLINE: &str = "Premium packaging solutions for the modern industry";
pub const ADDRESS: &str = "123 Industrial Park Road, Seoul, South Korea";
pub const PHONE: &str = "+82 2 1234 5678";
pub const EMAIL: &str = "info@jeilpackaging.com";
pub const HOURS: &str = "Mon - Fri, 9:00 - 18:00 KST";

/// Remote photography. The browser's default broken-image rendering applies
/// if a URL fails to load.
pub mod images {
    pub const WAREHOUSE: &str =
        "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?auto=format&fit=crop&w=2000";
    pub const FACILITY: &str =
        "https://images.unsplash.com/photo-1530124566582-a618bc2615dc?auto=format&fit=crop&w=1200";
}
