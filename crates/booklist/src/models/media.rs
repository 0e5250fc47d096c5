//! Supported media types and their catalog facet names.
//!
//! Some catalog formats (Visual Materials, Video Recording, eVideo, eJournal) never
//! carry a `shortAuthor`, so every record would be filtered out. They are left out
//! of this table on purpose and must stay out until records can be matched without
//! an author field. AudioBook is also absent: the catalog reports duplicates of the
//! eAudioBook entries under it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A media type the catalog can be filtered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MediaType {
    /// Printed books (includes large print).
    #[default]
    Book,
    /// Any electronic resource (includes eBook).
    ElectronicResource,
    /// Electronic book.
    EBook,
    /// Downloadable audio book.
    EAudioBook,
    /// Audio book on compact disc.
    BookOnCd,
    /// Large print book.
    LargePrint,
    /// Music compact disc.
    MusicCd,
    /// DVD video.
    Dvd,
    /// Blu-ray video.
    BluRay,
    /// Downloadable music.
    EMusic,
}

impl MediaType {
    /// Every supported media type, in lookup order.
    pub const ALL: [Self; 10] = [
        Self::Book,
        Self::ElectronicResource,
        Self::EBook,
        Self::EAudioBook,
        Self::BookOnCd,
        Self::LargePrint,
        Self::MusicCd,
        Self::Dvd,
        Self::BluRay,
        Self::EMusic,
    ];

    /// Lower-case name used in the configuration file.
    #[must_use]
    pub const fn config_name(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::ElectronicResource => "electronic resource",
            Self::EBook => "ebook",
            Self::EAudioBook => "eaudiobook",
            Self::BookOnCd => "book on cd",
            Self::LargePrint => "large print",
            Self::MusicCd => "music cd",
            Self::Dvd => "dvd",
            Self::BluRay => "blu-ray",
            Self::EMusic => "emusic",
        }
    }

    /// Facet value the catalog expects in the `Format` filter.
    #[must_use]
    pub const fn facet_name(self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::ElectronicResource => "Electronic Resource",
            Self::EBook => "eBook",
            Self::EAudioBook => "eAudioBook",
            Self::BookOnCd => "Book on CD",
            Self::LargePrint => "Large Print",
            Self::MusicCd => "Music CD",
            Self::Dvd => "DVD",
            Self::BluRay => "Blu-Ray",
            Self::EMusic => "eMusic",
        }
    }

    /// Look up a configuration name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidMediaType`] if the name is not supported.
    pub fn resolve(name: &str) -> Result<Self, CatalogError> {
        let lowered = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|media| media.config_name() == lowered)
            .ok_or_else(|| CatalogError::invalid_media_type(name))
    }

    /// Look up a facet name exactly as the catalog reports it.
    #[must_use]
    pub fn from_facet_name(facet: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|media| media.facet_name() == facet)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.facet_name())
    }
}

impl FromStr for MediaType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl TryFrom<String> for MediaType {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::resolve(&value)
    }
}

impl From<MediaType> for String {
    fn from(media: MediaType) -> Self {
        media.config_name().to_string()
    }
}
