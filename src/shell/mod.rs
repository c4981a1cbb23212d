// Composition root for the rooster service.
//
// Responsibilities
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers (state.rs).
// - Expose the HTTP router (http.rs) the binary serves.

pub mod http;
pub mod inbound;
pub mod state;
