pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod work_timers {
        pub mod core {
            pub mod decision;
            pub mod elapsed;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod state;
            pub mod ticket;
        }
        pub mod application {
            pub mod command_handler;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod start_work_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod pause_work_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod resume_work_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod stop_work_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_active_work_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_ticket_work_timers {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod current_user;
                pub mod error_response;
            }
            pub mod outbound {
                pub mod hour_bank;
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
                pub mod ticket_gate;
            }
        }
        pub mod client {
            pub mod api;
            pub mod availability;
            pub mod http_api;
            pub mod notifier;
            pub mod ticker;
            pub mod tracker;
        }
    }
}

pub mod shell;
