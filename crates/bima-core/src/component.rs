use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives an `area: Rect`, so a parent decides
/// *where* each child renders by handing it a sub-region of the frame.
///
/// To embed a component, wrap its message type in a variant of the parent
/// message and translate commands with [`Command::map`]:
///
/// ```rust,ignore
/// enum Msg { List(virtual_list::Message) }
///
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::List(m) => self.list.update(m).map(Msg::List),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type, typically wrapped in a parent
    /// message variant for routing.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side
    /// effects. The parent lifts the result into its own message type with
    /// [`Command::map`].
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`]. Implementations
    /// confine all drawing to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component. The parent collects
    /// these into its own [`Model::subscriptions`](crate::Model::subscriptions)
    /// return value, mapping messages appropriately.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has keyboard focus. A hint for the
    /// parent's input routing; defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
