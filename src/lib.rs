// Crate entry point. Re-export modules so tests and binaries can import them
// easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod core {
    pub mod ports;
    pub mod schedule;
    pub mod session;
    pub mod user;
    pub mod week;
}

pub mod application {
    pub mod errors;
    pub mod command_handlers {
        pub mod clock_in_handler;
        pub mod clock_out_handler;
        pub mod save_schedule_handler;
    }
    pub mod query_handlers {
        pub mod clocking_queries;
        pub mod directory_queries;
        pub mod schedule_queries;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_clock_store;
        pub mod in_memory_schedule_store;
        pub mod in_memory_user_directory;
    }
}

pub mod shell;
