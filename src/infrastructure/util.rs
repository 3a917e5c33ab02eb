use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterates Turkish letters through `slug`, so `Türkçe Müzik`
/// becomes `turkce-muzik`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
