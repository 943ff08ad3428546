macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned route definitions shared by the server and its clients.
pub mod v1 {
    pub const ROOT: &str = "/api/v1";
    pub const VERSION: &str = "v1";

    /// Read-side endpoints consumed by the storefront backend.
    pub mod catalog_bff {
        pub const ITEMS: &str = v1_path!("/catalogbff/items");
        pub const GET_BY_ID: &str = v1_path!("/catalogbff/getbyid");
        pub const BRANDS: &str = v1_path!("/catalogbff/brands");
    }

    pub mod catalog_item {
        pub const CREATE: &str = v1_path!("/catalogitem/create");
        pub const UPDATE: &str = v1_path!("/catalogitem/update");
        pub const REMOVE: &str = v1_path!("/catalogitem/remove");
    }

    pub mod catalog_brand {
        pub const CREATE: &str = v1_path!("/catalogbrand/create");
        pub const UPDATE: &str = v1_path!("/catalogbrand/update");
        pub const REMOVE: &str = v1_path!("/catalogbrand/remove");
    }

    pub mod specification {
        pub const CREATE: &str = v1_path!("/specification/create");
        pub const UPDATE: &str = v1_path!("/specification/update");
        pub const REMOVE: &str = v1_path!("/specification/remove");
    }
}

pub const PING: &str = "/ping";
pub const HEALTH: &str = "/health";
