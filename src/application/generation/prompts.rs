use super::categories::{DRAFT_CATEGORY_SLUGS, GenerationCategory};
use crate::{
    application::ports::language_model::CompletionRequest, domain::article::title::KNOWN_ARTISTS,
};

const JOURNALIST_ROLE: &str = "Sen profesyonel bir müzik gazetecisi ve müzik tarihi uzmanısın. \
Yazıların doğru, bilgilendirici ve SEO uyumlu olmalı. Gerçek müzik olaylarını anlatıyorsun.";

const EDITOR_ROLE: &str =
    "Sen profesyonel bir müzik gazetecisi ve editörüsün. Türkçe yaz. Sadece istenen JSON'u döndür.";

pub(super) fn bulk_request(count: u32) -> CompletionRequest {
    let categories = GenerationCategory::ALL
        .iter()
        .map(|category| format!("\"{}\"", category.display_name()))
        .collect::<Vec<_>>()
        .join(", ");
    let artists = KNOWN_ARTISTS.join(", ");

    let prompt = format!(
        "2020-2025 yılları arasında yabancı indie, alternatif ve rock müzik dünyasında yaşanmış \
gerçek ve önemli olaylardan {count} adet haber derle. Tüm metinler Türkçe olmalı.\n\n\
Her haber için alanlar:\n\
- title: 60-90 karakterlik başlık\n\
- excerpt: 2-3 cümlelik özet\n\
- content: 400-600 kelimelik, paragraflara ayrılmış içerik\n\
- category: şunlardan biri: {categories}\n\
- artist: sanatçı ya da grup adı (orijinal yazımıyla)\n\
- year: yıl (2020-2025)\n\
- imageSearch: İngilizce görsel arama kelimeleri\n\n\
Örnek sanatçılar: {artists}.\n\n\
Yalnızca bir JSON dizisi döndür, başka hiçbir şey yazma."
    );

    CompletionRequest::new(prompt)
        .with_system(JOURNALIST_ROLE)
        .with_temperature(0.8)
        .with_max_tokens(4000)
}

pub(super) fn single_request(brief: &str) -> CompletionRequest {
    let slugs = DRAFT_CATEGORY_SLUGS.join(", ");
    let prompt = format!(
        "Aşağıdaki isteğe göre tek bir müzik haberi ya da içeriği oluştur.\n\n\
Kurallar:\n\
- Türkçe yaz.\n\
- Başlık SEO uyumlu, akıcı ve abartısız olsun.\n\
- İçerik boş satırlarla paragraflara ayrılsın.\n\
- categorySlug şu değerlerden biri olmalı: {slugs}.\n\
- tags alanına en fazla 8 kısa etiket ekle.\n\n\
Yanıtı yalnızca şu biçimde bir JSON nesnesi olarak ver:\n\
{{\"title\": \"...\", \"excerpt\": \"...\", \"content\": \"...\", \"categorySlug\": \"...\", \"tags\": [\"...\"]}}\n\n\
İSTEK: {brief}"
    );

    CompletionRequest::new(prompt)
        .with_system(EDITOR_ROLE)
        .with_temperature(0.7)
        .with_max_tokens(1800)
}
