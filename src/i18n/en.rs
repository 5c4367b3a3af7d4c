pub const BTN_PREV: &str = "Previous";
pub const BTN_NEXT: &str = "Next";

pub const TEXT_LOADINGIMG: &str = "Loading artwork…";
pub const TEXT_IMG_UNAVAILABLE: &str = "Image unavailable";

pub const MONA_LISA: &str = "Mona Lisa";
pub const MONA_LISA_ARTIST: &str = "Leonardo da Vinci";
pub const MONA_LISA_YEAR: &str = "1503";

pub const GIRL_EARRING: &str = "Girl with a Pearl Earring";
pub const GIRL_EARRING_ARTIST: &str = "Johannes Vermeer";
pub const GIRL_EARRING_YEAR: &str = "1665";

pub const NIGHT_WATCH: &str = "The Night Watch";
pub const NIGHT_WATCH_ARTIST: &str = "Rembrandt van Rijn";
pub const NIGHT_WATCH_YEAR: &str = "1642";

pub const OPHELIA: &str = "Ophelia";
pub const OPHELIA_ARTIST: &str = "John Everett Millais";
pub const OPHELIA_YEAR: &str = "1852";

pub const FEEL_YOU: &str = "Feel You";
pub const FEEL_YOU_ARTIST: &str = "Unknown artist";
pub const FEEL_YOU_YEAR: &str = "n.d.";
