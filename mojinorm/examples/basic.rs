//! Recipe-based and explicit stage-list construction.

use mojinorm::transliterators::{HyphensOptions, HyphensPrecedence};
use mojinorm::{
    make_transliterator, make_transliterator_from_recipe, CircledOrSquaredRecipeOption,
    ToFullwidthOption, TransliterationRecipe, TransliteratorConfig,
};

fn main() -> Result<(), mojinorm::ConfigError> {
    let recipe = TransliterationRecipe {
        kanji_old_new: true,
        replace_spaces: true,
        replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
        replace_combined_characters: true,
        to_fullwidth: ToFullwidthOption::Enabled,
        ..TransliterationRecipe::default()
    };
    let transliterator = make_transliterator_from_recipe(&recipe)?;
    for input in &["①②③", "㍿", "舊字體の變換", "hello\u{3000}world"] {
        println!("{} -> {}", input, transliterator.transliterate(input));
    }

    let transliterator = make_transliterator(vec![
        TransliteratorConfig::Spaces,
        TransliteratorConfig::Hyphens(HyphensOptions {
            precedence: vec![HyphensPrecedence::Ascii],
        }),
    ])?;
    println!("{}", transliterator.transliterate("2019—2020\u{3000}update"));
    Ok(())
}
