use std::io::Read;

use suppaftp::list::File;
use suppaftp::native_tls::TlsConnector;
use suppaftp::{FtpError, FtpStream, Mode, Status};
use tracing::debug;

use crate::entry::{EntryKind, RemoteEntry};
use crate::error::TransportError;
use crate::session::{Connector, Session};

/// Default FTP control port.
const DEFAULT_PORT: u16 = 21;

/// Opens FTPS sessions against a single host.
///
/// The connector dials the control connection, upgrades it to TLS (which also
/// secures the data channel), logs in, and selects the transfer mode. Passive
/// mode is the default because most FTPS deployments sit behind NAT.
///
/// ```
/// use transport::FtpsConnector;
///
/// let connector = FtpsConnector::new("ftp.example.com", "user", "secret")
///     .port(2121)
///     .passive(true);
/// let _ = connector;
/// ```
#[derive(Clone, Debug)]
pub struct FtpsConnector {
    host: String,
    port: u16,
    user: String,
    password: String,
    passive: bool,
}

impl FtpsConnector {
    /// Creates a connector for `host` with the given credentials.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: password.into(),
            passive: true,
        }
    }

    /// Overrides the control port (default 21).
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Selects passive (`true`) or active (`false`) transfer mode.
    #[must_use]
    pub const fn passive(mut self, passive: bool) -> Self {
        self.passive = passive;
        self
    }
}

impl Connector for FtpsConnector {
    type Session = FtpsSession;

    fn connect(&self) -> Result<FtpsSession, TransportError> {
        let address = format!("{}:{}", self.host, self.port);
        debug!(address = %address, "opening ftps session");

        let stream = FtpStream::connect(&address)
            .map_err(|error| TransportError::transport(format!("failed to connect to '{address}'"), error))?;

        let tls = TlsConnector::new()
            .map_err(|error| TransportError::transport("failed to initialize TLS", error))?;
        let mut stream = stream
            .into_secure(tls.into(), &self.host)
            .map_err(|error| {
                TransportError::transport(
                    format!("failed to secure connection to '{}'", self.host),
                    error,
                )
            })?;

        stream
            .login(&self.user, &self.password)
            .map_err(|error| TransportError::authentication(self.host.clone(), error))?;

        let mode = if self.passive { Mode::Passive } else { Mode::Active };
        stream.set_mode(mode);

        debug!(host = %self.host, "ftps session established");
        Ok(FtpsSession { stream })
    }
}

/// An open FTPS session. Issues `QUIT` when dropped.
pub struct FtpsSession {
    stream: FtpStream,
}

impl Session for FtpsSession {
    fn change_directory(&mut self, path: &str) -> Result<(), TransportError> {
        debug!(path = %path, "cwd");
        self.stream
            .cwd(path)
            .map_err(|error| classify(path, "failed to change directory to", error))
    }

    fn list_entries(&mut self) -> Result<Vec<RemoteEntry>, TransportError> {
        let lines = self
            .stream
            .list(None)
            .map_err(|error| TransportError::transport("failed to list remote directory", error))?;

        // Unparseable lines and entries that are neither files nor
        // directories (symlinks, devices) are dropped.
        let entries = lines
            .iter()
            .filter_map(|line| File::try_from(line.as_str()).ok())
            .filter_map(|file| {
                let kind = if file.is_directory() {
                    EntryKind::Directory
                } else if file.is_file() {
                    EntryKind::File
                } else {
                    return None;
                };
                Some(RemoteEntry::new(file.name(), kind))
            })
            .collect();
        Ok(entries)
    }

    fn make_directory(&mut self, path: &str) -> Result<(), TransportError> {
        debug!(path = %path, "mkd");
        self.stream
            .mkdir(path)
            .map_err(|error| TransportError::transport(format!("failed to create remote directory '{path}'"), error))
    }

    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, TransportError> {
        debug!(name = %name, "retr");
        self.stream
            .retr_as_buffer(name)
            .map(std::io::Cursor::into_inner)
            .map_err(|error| classify(name, "failed to retrieve", error))
    }

    fn store(&mut self, name: &str, mut contents: &mut dyn Read) -> Result<(), TransportError> {
        debug!(name = %name, "stor");
        self.stream
            .put_file(name, &mut contents)
            .map(|_| ())
            .map_err(|error| TransportError::transport(format!("failed to store '{name}'"), error))
    }
}

impl Drop for FtpsSession {
    fn drop(&mut self) {
        // Best-effort QUIT; the connection closes either way.
        let _ = self.stream.quit();
    }
}

/// Maps the FTP 550 reply onto the distinct not-found signal; everything else
/// stays a generic transport failure.
fn classify(path: &str, action: &str, error: FtpError) -> TransportError {
    match &error {
        FtpError::UnexpectedResponse(response) if response.status == Status::FileUnavailable => {
            TransportError::path_not_found(path)
        }
        _ => TransportError::transport(format!("{action} '{path}'"), error),
    }
}
