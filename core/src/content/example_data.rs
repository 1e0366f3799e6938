//! Bundled example dataset, served when the store is unreachable or still
//! empty so the dashboard has something to show.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::model::{ContentItem, ContentItemId, ContentItemStatus};

pub fn example_content_items() -> Vec<ContentItem> {
    let now = Utc::now();
    vec![
        ContentItem {
            id: ContentItemId::from("example-4"),
            title: "Campaña Hoy: Día del Programador".to_owned(),
            description: Some(
                "¡Feliz día a todos los desarrolladores! Código limpio y café fuerte.".to_owned(),
            ),
            file_url: "https://picsum.photos/seed/hoy/400/300".to_owned(),
            category: "campañas".to_owned(),
            // dated today so the date filter has something to match any day
            suggested_date: Some(now.date_naive()),
            status: ContentItemStatus::Approved,
            comments: Some("Publicar a las 9 AM.".to_owned()),
            created_at: now,
            updated_at: now,
        },
        ContentItem {
            id: ContentItemId::from("example-1"),
            title: "Lanzamiento Nueva Web".to_owned(),
            description: Some(
                "¡Estamos emocionados de anunciar el lanzamiento de nuestra nueva página web! \
                 Visítala ahora."
                    .to_owned(),
            ),
            file_url: "https://picsum.photos/seed/lanzamiento/400/300".to_owned(),
            category: "branding".to_owned(),
            suggested_date: NaiveDate::from_ymd_opt(2024, 8, 15),
            status: ContentItemStatus::Published,
            comments: Some("Post principal de la campaña de lanzamiento.".to_owned()),
            created_at: datetime(2024, 7, 10, 10, 0),
            updated_at: datetime(2024, 7, 12, 15, 30),
        },
        ContentItem {
            id: ContentItemId::from("example-2"),
            title: "Promo Verano 20% OFF".to_owned(),
            description: Some(
                "Aprovecha nuestro descuento del 20% en todos los servicios durante el mes de \
                 agosto."
                    .to_owned(),
            ),
            file_url: "https://picsum.photos/seed/promo/400/300".to_owned(),
            category: "promociones".to_owned(),
            suggested_date: NaiveDate::from_ymd_opt(2024, 8, 1),
            status: ContentItemStatus::Approved,
            comments: Some("Revisar copy final antes de publicar.".to_owned()),
            created_at: datetime(2024, 7, 20, 9, 0),
            updated_at: datetime(2024, 7, 25, 11, 0),
        },
        ContentItem {
            id: ContentItemId::from("example-3"),
            title: "Tip: Optimiza tu SEO Local".to_owned(),
            description: Some(
                "Mejora tu visibilidad en búsquedas locales con estos 5 sencillos pasos."
                    .to_owned(),
            ),
            file_url: "https://picsum.photos/seed/tip/400/300".to_owned(),
            category: "tips".to_owned(),
            suggested_date: NaiveDate::from_ymd_opt(2024, 8, 22),
            status: ContentItemStatus::Draft,
            comments: None,
            created_at: datetime(2024, 7, 28, 14, 0),
            updated_at: datetime(2024, 7, 28, 14, 0),
        },
    ]
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("example datetime literals are valid")
}
