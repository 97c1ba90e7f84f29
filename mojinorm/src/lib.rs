//! Character-level Japanese text normalization.
//!
//! The engine ingests a string, splits it into a stream of logical
//! characters (bundling ideographic/standardized variation sequences), runs
//! the stream through a chain of transliterator stages, and reassembles the
//! result. Chains are built either from an explicit stage list or compiled
//! from a [`TransliterationRecipe`].
//!
//! ```
//! use mojinorm::{make_transliterator_from_recipe, TransliterationRecipe};
//!
//! let recipe = TransliterationRecipe {
//!     replace_spaces: true,
//!     ..TransliterationRecipe::default()
//! };
//! let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
//! assert_eq!(transliterator.transliterate("hello\u{3000}world"), "hello world");
//! ```

pub mod chars;
pub mod intrinsics;
pub mod recipes;
pub mod transliterator;
pub mod transliterators;

pub use chars::{build_char_list, from_chars, Char, CharExt};
pub use intrinsics::{ChainedTransliterator, CharIter, ConfigError, Transliterate};
pub use recipes::{
    build_transliterator_configs_from_recipe, Charset, CircledOrSquaredRecipeOption,
    RemoveIvsSvsOption, ReplaceHyphensOption, ToFullwidthOption, ToHalfwidthOption,
    TransliterationRecipe,
};
pub use transliterator::{make_transliterator, make_transliterator_from_recipe, Transliterator};
pub use transliterators::TransliteratorConfig;
