pub mod shared {
    pub mod config {
        pub mod coerce;
        pub mod env_file;
        pub mod environment;
        pub mod resolver;
        pub mod settings;
    }
    pub mod infrastructure {
        pub mod database;
        pub mod logging;
    }
}

pub mod modules {
    pub mod health {
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod user_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod users_in_memory;
            }
        }
    }
}

pub mod shell;
