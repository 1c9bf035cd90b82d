use hotelstream_etl::error::EtlError;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

/// Returns whether terminal output should include backtraces.
fn should_render_backtrace() -> bool {
    matches!(
        std::env::var("RUST_BACKTRACE").as_deref(),
        Ok("1") | Ok("full")
    )
}

/// Result type for transformer operations.
pub type TransformerResult<T> = Result<T, TransformerError>;

/// Captured backtrace wrapper to avoid thiserror's unstable feature detection.
pub struct CapturedBacktrace(Backtrace);

impl CapturedBacktrace {
    fn capture() -> Self {
        Self(Backtrace::capture())
    }
}

impl fmt::Debug for CapturedBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for the transformer service.
///
/// Wraps [`EtlError`] for pipeline errors and provides variants for
/// infrastructure errors.
#[derive(Debug)]
pub enum TransformerError {
    /// Pipeline or ETL-related error.
    Etl(EtlError),
    /// Configuration error.
    Config(Box<dyn Error + Send + Sync>, CapturedBacktrace),
    /// I/O error.
    Io(std::io::Error, CapturedBacktrace),
}

impl TransformerError {
    /// Returns a short category label for this error.
    pub fn category(&self) -> &'static str {
        match self {
            TransformerError::Etl(_) => "pipeline error",
            TransformerError::Config(_, _) => "configuration error",
            TransformerError::Io(_, _) => "i/o error",
        }
    }

    /// Returns the backtrace for this error.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            TransformerError::Etl(err) => err.backtrace(),
            TransformerError::Config(_, cb) => Some(&cb.0),
            TransformerError::Io(_, cb) => Some(&cb.0),
        }
    }

    /// Creates a configuration error from any boxed source.
    pub fn config<E: Error + Send + Sync + 'static>(err: E) -> Self {
        TransformerError::Config(Box::new(err), CapturedBacktrace::capture())
    }

    /// Returns a user-oriented report for terminal output.
    pub fn render_report(&self) -> String {
        let mut out = String::new();
        out.push_str("transformer failed\n");
        out.push_str(&format!("category: {}\n", self.category()));
        out.push_str(&format!("error: {}\n", self));

        if !matches!(self, TransformerError::Etl(err) if err.errors().is_some()) {
            let mut source = Error::source(self);
            let mut idx = 1usize;
            while let Some(err) = source {
                out.push_str(&format!("cause {idx}: {err}\n"));
                source = err.source();
                idx += 1;
            }
        }

        if should_render_backtrace()
            && let Some(backtrace) = self.backtrace()
        {
            out.push_str("backtrace:\n");
            out.push_str(&backtrace.to_string());
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }

        out
    }
}

impl fmt::Display for TransformerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformerError::Etl(err) => write!(f, "{err}"),
            TransformerError::Config(source, _) => write!(f, "configuration error: {source}"),
            TransformerError::Io(source, _) => write!(f, "i/o error: {source}"),
        }
    }
}

impl Error for TransformerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TransformerError::Etl(err) => err.source(),
            TransformerError::Config(source, _) => Some(source.as_ref()),
            TransformerError::Io(source, _) => Some(source),
        }
    }
}

impl From<std::io::Error> for TransformerError {
    fn from(err: std::io::Error) -> Self {
        TransformerError::Io(err, CapturedBacktrace::capture())
    }
}

impl From<EtlError> for TransformerError {
    fn from(err: EtlError) -> Self {
        TransformerError::Etl(err)
    }
}
