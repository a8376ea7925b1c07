use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait.
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state from [`Flags`](Model::Flags)
///    and may return a [`Command`] for early side effects.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. External events arrive as messages through [`Subscription`]s.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further work.
/// 5. Steps 2--4 repeat until [`Command::quit`] is returned.
///
/// Messages are handled strictly in arrival order, one at a time, so an
/// update never observes a partially applied earlier update.
///
/// # Example
///
/// ```rust,ignore
/// use bima_core::{Model, Command};
/// use ratatui::Frame;
/// use ratatui::widgets::Paragraph;
///
/// struct Counter { count: i32 }
///
/// #[derive(Debug)]
/// enum Msg { Increment, Decrement }
///
/// impl Model for Counter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_flags: ()) -> (Self, Command<Msg>) {
///         (Counter { count: 0 }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Increment => self.count += 1,
///             Msg::Decrement => self.count -= 1,
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new(format!("{}", self.count)), frame.area());
///     }
/// }
/// ```
pub trait Model: Sized + Send + 'static {
    /// The application's message type. Every event that can affect state is
    /// a variant of this type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// bima injects the policy catalog here rather than reading a hidden
    /// global, so tests can run the whole application against arbitrary
    /// fixture data.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// Must be a pure function of `&self`; the runtime calls it after every
    /// update and on the initial render.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions. Called after every update; the runtime
    /// diffs the returned list against the active set, starting new
    /// subscriptions and cancelling removed ones.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
