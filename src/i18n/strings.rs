/// Localized field-name table for a language.
///
/// Builder batch documents spell their keys in the builder's own language
/// (`name` vs `nom`, `author` vs `auteur`, ...). This table maps each
/// logical field to the key string used inside documents for one language,
/// plus the default label rendered when no info document supplies a value.
///
/// The one exception is the `type` discriminator, which is spelled `type`
/// in every language; only its value set is localized.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Default label for a field no info document provided
    pub unknown: &'static str,

    /// Value of the `type` field marking an info document
    pub info: &'static str,

    // ==================== Info document fields ====================
    /// Key holding the area name
    pub name: &'static str,

    /// Key holding the document author
    pub author: &'static str,

    /// Key holding the area identifier
    pub ident: &'static str,

    /// Key holding the free-form note
    pub note: &'static str,

    // ==================== Room document fields ====================
    /// Value of the `type` field marking a room document
    pub room: &'static str,

    /// Key holding a room's coordinates
    pub coords: &'static str,

    /// Key holding a room's title
    pub title: &'static str,

    /// Key holding a room's description
    pub description: &'static str,

    /// Key holding a room's exit list
    pub exits: &'static str,

    /// Key holding an exit's direction
    pub direction: &'static str,

    /// Key holding an exit's destination
    pub destination: &'static str,

    /// Key holding a room's alias list
    pub aliases: &'static str,
}

/// English field names (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    unknown: "Unknown",
    info: "info",
    name: "name",
    author: "author",
    ident: "ident",
    note: "note",
    room: "room",
    coords: "coords",
    title: "title",
    description: "description",
    exits: "exits",
    direction: "direction",
    destination: "destination",
    aliases: "aliases",
};

/// French field names
pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    unknown: "Inconnu",
    info: "info",
    name: "nom",
    author: "auteur",
    ident: "ident",
    note: "note",
    room: "salle",
    coords: "coords",
    title: "titre",
    description: "description",
    exits: "sorties",
    direction: "direction",
    destination: "destination",
    aliases: "alias",
};
