//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message category and
//! is dispatched from `App::update()`:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Grid(msg) => GridHandler.handle(&mut self.state, msg),
//!         Message::Toolbar(msg) => ToolbarHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod grid;
mod load;
mod pagination;
mod toolbar;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use grid::GridHandler;
pub use load::handle_records_loaded;
pub use pagination::PaginationHandler;
pub use toolbar::ToolbarHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
