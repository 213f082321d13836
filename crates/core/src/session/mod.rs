mod config;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use config::{DEFAULT_WEBDRIVER_URL, SessionConfig};
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder};
use tracing::debug;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::wait::WaitPolicy;

/// One live WebDriver session.
///
/// A `Session` is a cheap cloneable handle: page objects hold a clone while
/// the owning scenario keeps lifecycle control. [`Session::release`] closes
/// the underlying browser session exactly once; every operation on a
/// released handle fails with [`Error::SessionClosed`].
#[derive(Clone)]
pub struct Session {
	inner: Arc<SessionInner>,
}

struct SessionInner {
	client: Client,
	closed: AtomicBool,
	wait: WaitPolicy,
}

impl Session {
	/// Connects to the configured WebDriver endpoint and applies window
	/// state. Fails with [`Error::SessionStart`] when the browser cannot be
	/// started; callers do not retry.
	pub async fn acquire(config: &SessionConfig) -> Result<Self> {
		let mut builder = ClientBuilder::rustls().map_err(|e| Error::SessionStart(e.to_string()))?;
		let client = builder
			.capabilities(config.capabilities())
			.connect(&config.webdriver_url)
			.await
			.map_err(|e| Error::SessionStart(e.to_string()))?;

		if config.maximize {
			client
				.maximize_window()
				.await
				.map_err(|e| Error::SessionStart(format!("maximize window: {e}")))?;
		}

		debug!(
			target = "pagecheck",
			webdriver = %config.webdriver_url,
			headless = config.headless,
			maximize = config.maximize,
			timeout_ms = config.wait.timeout_ms(),
			"webdriver session established"
		);

		Ok(Self {
			inner: Arc::new(SessionInner {
				client,
				closed: AtomicBool::new(false),
				wait: config.wait,
			}),
		})
	}

	/// Wait policy this session was configured with.
	pub fn wait(&self) -> WaitPolicy {
		self.inner.wait
	}

	pub fn is_closed(&self) -> bool {
		self.inner.closed.load(Ordering::SeqCst)
	}

	fn client(&self) -> Result<&Client> {
		if self.is_closed() {
			return Err(Error::SessionClosed);
		}
		Ok(&self.inner.client)
	}

	/// Loads `url` in the browser. Transport failures are reported as
	/// [`Error::Navigation`]; page objects degrade those to a timed-out
	/// load state.
	pub async fn goto(&self, url: &str) -> Result<()> {
		let client = self.client()?;
		client.goto(url).await.map_err(|source| Error::Navigation {
			url: url.to_string(),
			source,
		})
	}

	/// Resolves a locator against the current page.
	///
	/// Absence is not an error: a locator matching nothing yields `Ok(None)`.
	pub async fn find(&self, locator: &Locator) -> Result<Option<Element>> {
		let client = self.client()?;
		match client.find(locator.as_webdriver()).await {
			Ok(element) => Ok(Some(element)),
			Err(err) if err.is_no_such_element() => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	/// Evaluates a JavaScript expression in the page.
	pub async fn execute(&self, script: &str) -> Result<serde_json::Value> {
		let client = self.client()?;
		Ok(client.execute(script, Vec::new()).await?)
	}

	pub async fn current_url(&self) -> Result<url::Url> {
		let client = self.client()?;
		Ok(client.current_url().await?)
	}

	pub async fn title(&self) -> Result<String> {
		let client = self.client()?;
		Ok(client.title().await?)
	}

	/// Terminates the session unconditionally. Idempotent: a second release
	/// is a no-op.
	pub async fn release(&self) -> Result<()> {
		if self.inner.closed.swap(true, Ordering::SeqCst) {
			return Ok(());
		}
		debug!(target = "pagecheck", "releasing webdriver session");
		self.inner.client.clone().close().await?;
		Ok(())
	}
}

/// Executes a callback with a freshly acquired session, releasing it on all
/// exit paths.
pub async fn with_session<T>(
	config: &SessionConfig,
	f: impl for<'s> FnOnce(&'s Session) -> Pin<Box<dyn Future<Output = Result<T>> + 's>>,
) -> Result<T> {
	let session = Session::acquire(config).await?;

	let res = f(&session).await;
	let released = session.release().await;

	match res {
		Ok(value) => {
			released?;
			Ok(value)
		}
		// The callback error wins over a release failure.
		Err(err) => {
			if let Err(release_err) = released {
				debug!(target = "pagecheck", error = %release_err, "release failed after scenario error");
			}
			Err(err)
		}
	}
}
