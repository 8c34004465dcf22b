pub mod error;

pub mod models {
    pub mod conversion;
    pub mod paths;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod service {
    pub mod config_service;
    pub mod document;
    pub mod image;
    pub mod path_resolver;
    pub mod pdf;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod facade {
    pub mod conversion_facade;
    pub mod image_dispatcher;
    pub mod pdf_dispatcher;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod action {
    pub mod cli;
    pub mod interactive;
    pub mod shell;
}

pub mod utils {
    pub mod pdf;
    pub mod utils;
}
