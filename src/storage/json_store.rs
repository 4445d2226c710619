//! A JSON file backed store of employees
//!
//! The whole roster is held in a single JSON array. Every save rewrites the
//! file in full: the new content is written to a temporary file alongside the
//! target and renamed over it, so readers never observe a partially written
//! roster.
//!
//! A store has a *runtime copy* (the file it reads and writes) and optionally
//! a *seed copy*. A missing runtime copy is initialised from the seed, or
//! created empty if there is no seed. With [`StoreOptions::mirror_to_seed`]
//! set, every successful save is also written to the seed, so the seed can be
//! restored by deleting the runtime copy. The runtime copy is authoritative:
//! once it has been written the save succeeds, and a failure to update the
//! seed is logged as a warning.

use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    domain::Employee,
    storage::{validate_all, EmployeeStore, InvalidEmployees},
};

/// Where a [`JsonStore`] keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// The runtime copy that is read and written.
    pub path: PathBuf,
    /// The seed copy used to initialise a missing runtime copy.
    pub seed: Option<PathBuf>,
    /// Whether every successful save is also written to the seed copy.
    ///
    /// Mirroring is best effort. A save that reached the runtime copy is not
    /// failed by an error writing the seed.
    pub mirror_to_seed: bool,
}

impl StoreOptions {
    /// A store at `path` with no seed. A missing file is created empty.
    #[must_use]
    pub const fn isolated(path: PathBuf) -> Self {
        Self {
            path,
            seed: None,
            mirror_to_seed: false,
        }
    }

    /// A store at `path`, initialised from `seed` if `path` does not exist.
    #[must_use]
    pub const fn seeded(path: PathBuf, seed: PathBuf) -> Self {
        Self {
            path,
            seed: Some(seed),
            mirror_to_seed: false,
        }
    }

    /// Enable or disable mirroring saves onto the seed copy.
    #[must_use]
    pub const fn mirror_to_seed(mut self, mirror: bool) -> Self {
        self.mirror_to_seed = mirror;
        self
    }
}

/// A JSON file backed store of employees.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    mirror: Option<PathBuf>,
}

impl JsonStore {
    /// Open a store, initialising the runtime copy if it does not exist.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - mirroring is requested without a seed copy
    /// - the runtime copy does not exist and cannot be created, or the seed
    ///   copy it would be initialised from cannot be read
    pub fn open(options: StoreOptions) -> Result<Self, OpenError> {
        let StoreOptions {
            path,
            seed,
            mirror_to_seed,
        } = options;

        if mirror_to_seed && seed.is_none() {
            return Err(OpenError::MirrorWithoutSeed);
        }

        if !path.exists() {
            initialise(&path, seed.as_deref()).map_err(|source| OpenError::Init {
                path: path.clone(),
                source,
            })?;
        }

        let mirror = if mirror_to_seed { seed } else { None };

        Ok(Self { path, mirror })
    }

    /// The path of the runtime copy.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path of the seed copy that saves are mirrored onto, if any.
    #[must_use]
    pub fn mirror(&self) -> Option<&Path> {
        self.mirror.as_deref()
    }
}

fn initialise(path: &Path, seed: Option<&Path>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if let Some(seed) = seed {
        tracing::debug!(
            "Initialising {} from seed {}",
            path.display(),
            seed.display()
        );
        fs::copy(seed, path)?;
    } else {
        tracing::debug!("Initialising {} with an empty roster", path.display());
        write_atomically(path, b"[]\n")?;
    }

    Ok(())
}

impl EmployeeStore for JsonStore {
    fn load_all(&self) -> Result<Vec<Employee>, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            tracing::debug!("{} is empty, treating as an empty roster", self.path.display());
            return Ok(Vec::new());
        }

        let employees: Vec<Employee> =
            serde_json::from_str(&content).map_err(|source| LoadError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} employees from {}",
            employees.len(),
            self.path.display()
        );

        Ok(employees)
    }

    fn save_all(&self, employees: &[Employee]) -> Result<(), SaveError> {
        validate_all(employees)?;

        let mut content = serde_json::to_vec_pretty(employees)?;
        content.push(b'\n');

        write_atomically(&self.path, &content).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "Saved {} employees to {}",
            employees.len(),
            self.path.display()
        );

        if let Some(seed) = &self.mirror {
            match write_atomically(seed, &content) {
                Ok(()) => tracing::debug!("Mirrored roster to {}", seed.display()),
                Err(e) => tracing::warn!("Failed to mirror roster to {}: {e}", seed.display()),
            }
        }

        Ok(())
    }
}

/// Write `content` to a temporary file next to `path`, then rename it over
/// `path`.
fn write_atomically(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Failure to open a [`JsonStore`].
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// Mirroring was requested but no seed copy was configured.
    #[error("mirroring saves to the seed requires a seed file")]
    MirrorWithoutSeed,

    /// The runtime copy could not be created.
    #[error("failed to initialise {}: {source}", .path.display())]
    Init {
        /// The runtime copy that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Failure to load the roster.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The backing file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The backing file is not a valid roster.
    #[error("malformed employee data in {}: {source}", .path.display())]
    Malformed {
        /// The file that could not be parsed.
        path: PathBuf,
        /// The underlying decoding error.
        source: serde_json::Error,
    },
}

/// Failure to save the roster.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// At least one employee failed validation; nothing was written.
    #[error(transparent)]
    Invalid(#[from] InvalidEmployees),

    /// The roster could not be encoded.
    #[error("failed to encode employees: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backing file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
