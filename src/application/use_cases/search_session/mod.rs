use crate::application::dto::{SessionInput, UserAction};
use crate::ports::outbound::{ProgressReporter, SearchRepository};
use crate::search::state::{Command, RequestId, SearchViewState, ViewEvent};
use crate::shared::Result;
use chrono::Utc;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, Stream, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Quiet period a query must survive before it is searched
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Fetches started by the session, each resolving to its completion event
type InFlight = FuturesUnordered<BoxFuture<'static, ViewEvent>>;

/// SearchSession - drives the search view for its whole lifetime
///
/// Owns the view state and runs it on a single task: user input, the
/// debounce timer and fetch completions are multiplexed with `tokio::select!`
/// and fed through the pure state transitions one at a time.
///
/// Fetches are never cancelled. A completion that does not belong to the most
/// recently issued request is dropped by the state machine.
///
/// # Type Parameters
/// * `R` - SearchRepository implementation
/// * `P` - ProgressReporter implementation
pub struct SearchSession<R, P> {
    repository: Arc<R>,
    progress_reporter: P,
    debounce: Duration,
    state: SearchViewState,
}

impl<R, P> SearchSession<R, P>
where
    R: SearchRepository + 'static,
    P: ProgressReporter,
{
    /// Creates a new SearchSession with injected dependencies
    pub fn new(repository: R, progress_reporter: P, debounce: Duration) -> Self {
        Self {
            repository: Arc::new(repository),
            progress_reporter,
            debounce,
            state: SearchViewState::new(),
        }
    }

    pub fn state(&self) -> &SearchViewState {
        &self.state
    }

    /// Searches `query` immediately, skipping the debounce window
    ///
    /// Used by one-shot mode. An empty query issues no fetch.
    pub async fn search_now(&mut self, query: &str) -> &SearchViewState {
        self.dispatch(ViewEvent::QueryChanged(query.to_string()));

        if let Some(Command::Fetch { request, query }) = self.dispatch(ViewEvent::DebounceElapsed)
        {
            self.progress_reporter.report_loading(&query);
            let completion = Self::fetch(Arc::clone(&self.repository), request, query).await;
            self.dispatch(completion);
        }

        &self.state
    }

    /// Applies a user action without any timer or fetch side effects
    ///
    /// Meant for selections; a `Type` action only updates the query text.
    pub fn apply(&mut self, action: UserAction) -> &SearchViewState {
        self.dispatch(action.into_event());
        &self.state
    }

    /// Runs the interactive loop until `Quit`, or until `inputs` ends and
    /// nothing is pending (no armed debounce, no fetch in flight)
    ///
    /// `render` is called once up front and after every state change.
    ///
    /// # Errors
    /// Returns the first error yielded by `inputs` or raised by `render`
    pub async fn run<S, F>(&mut self, mut inputs: S, mut render: F) -> Result<()>
    where
        S: Stream<Item = Result<SessionInput>> + Unpin,
        F: FnMut(&SearchViewState) -> Result<()>,
    {
        let mut deadline: Option<Instant> = None;
        let mut in_flight: InFlight = FuturesUnordered::new();
        let mut inputs_open = true;

        render(&self.state)?;

        loop {
            if !inputs_open && deadline.is_none() && in_flight.is_empty() {
                break;
            }

            tokio::select! {
                input = inputs.next(), if inputs_open => match input {
                    None => inputs_open = false,
                    Some(Err(e)) => return Err(e),
                    Some(Ok(SessionInput::Quit)) => break,
                    Some(Ok(SessionInput::Invalid(message))) => {
                        self.progress_reporter.report_error(&message);
                    }
                    Some(Ok(SessionInput::Action(action))) => {
                        let command = self.dispatch(action.into_event());
                        self.execute(command, &mut deadline, &mut in_flight);
                        render(&self.state)?;
                    }
                },
                _ = wait_until(deadline), if deadline.is_some() => {
                    deadline = None;
                    let command = self.dispatch(ViewEvent::DebounceElapsed);
                    if command.is_some() {
                        self.execute(command, &mut deadline, &mut in_flight);
                        render(&self.state)?;
                    }
                }
                Some(completion) = in_flight.next(), if !in_flight.is_empty() => {
                    if self.is_pending(&completion) {
                        self.dispatch(completion);
                        render(&self.state)?;
                    }
                }
                else => break,
            }
        }

        Ok(())
    }

    /// Feeds one event through the state machine and reports fetch outcomes
    fn dispatch(&mut self, event: ViewEvent) -> Option<Command> {
        let applies = self.is_pending(&event);
        let outcome = match &event {
            ViewEvent::FetchSucceeded { result, .. } => Some(Ok(result.suggestions().len())),
            ViewEvent::FetchFailed { message, .. } => Some(Err(message.clone())),
            _ => None,
        };

        let (state, command) = std::mem::take(&mut self.state).update(event);
        self.state = state;

        match outcome {
            Some(Ok(count)) if applies => self.progress_reporter.report_completion(&format!(
                "✅ Found {} suggestion(s) for '{}'",
                count,
                self.state
                    .visible_result()
                    .map(|view| view.query.as_str())
                    .unwrap_or_default()
            )),
            Some(Err(message)) if applies => self
                .progress_reporter
                .report_error(&format!("Error fetching data: {}", message)),
            _ => {}
        }

        command
    }

    /// True when `event` completes the fetch the view is waiting for
    fn is_pending(&self, event: &ViewEvent) -> bool {
        let request = match event {
            ViewEvent::FetchSucceeded { request, .. } | ViewEvent::FetchFailed { request, .. } => {
                *request
            }
            _ => return false,
        };
        self.state.is_loading() && self.state.last_request() == Some(request)
    }

    fn execute(
        &self,
        command: Option<Command>,
        deadline: &mut Option<Instant>,
        in_flight: &mut InFlight,
    ) {
        match command {
            Some(Command::ArmDebounce) => *deadline = Some(Instant::now() + self.debounce),
            Some(Command::CancelDebounce) => *deadline = None,
            Some(Command::Fetch { request, query }) => {
                self.progress_reporter.report_loading(&query);
                in_flight.push(Self::fetch(Arc::clone(&self.repository), request, query));
            }
            None => {}
        }
    }

    fn fetch(
        repository: Arc<R>,
        request: RequestId,
        query: String,
    ) -> BoxFuture<'static, ViewEvent> {
        async move {
            match repository.search(&query).await {
                Ok(result) => ViewEvent::FetchSucceeded {
                    request,
                    result,
                    fetched_at: Utc::now(),
                },
                Err(e) => ViewEvent::FetchFailed {
                    request,
                    message: e.to_string(),
                },
            }
        }
        .boxed()
    }
}

/// Sleeps until `deadline`, or forever when there is none
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
