pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod auth;
        pub mod event_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod calendar;
            pub mod classify;
            pub mod draft;
            pub mod patch;
            pub mod record;
            pub mod transitions;
            pub mod validation;
            pub mod wire;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod manage_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod browse_events {
                pub mod feed;
                pub mod runner;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod accounts {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
