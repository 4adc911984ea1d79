//! Demo data set for the marketplace.
//!
//! Seed appointments are placed relative to the current date so the
//! calendar always has upcoming sessions to show.

use chrono::{Duration, Utc};
use shared_models::{
    Appointment, AppointmentStatus, ContentItem, ContentType, Professional, ProfessionalReview,
};
use uuid::Uuid;

const AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1758273241260-f49172d876e3?w=200&h=200&fit=crop";

pub fn sample_professionals() -> Vec<Professional> {
    vec![
        Professional {
            id: Uuid::new_v4(),
            name: "Dra. María González".to_string(),
            specialty: "Psicóloga Clínica".to_string(),
            description: "Especialista en ansiedad, depresión y terapia cognitivo-conductual. \
                          Más de 10 años de experiencia ayudando a personas a superar sus \
                          desafíos emocionales."
                .to_string(),
            rating: 4.9,
            reviews: 127,
            price: 60,
            location: "Madrid, España".to_string(),
            modality: vec!["Presencial".to_string(), "Online".to_string()],
            avatar: AVATAR_URL.to_string(),
            experience: 10,
            availability: "Disponible esta semana".to_string(),
        },
        Professional {
            id: Uuid::new_v4(),
            name: "Dr. Carlos Méndez".to_string(),
            specialty: "Terapeuta Cognitivo".to_string(),
            description: "Experto en manejo del estrés, mindfulness y desarrollo personal. \
                          Enfoque práctico y centrado en soluciones."
                .to_string(),
            rating: 4.8,
            reviews: 98,
            price: 55,
            location: "Barcelona, España".to_string(),
            modality: vec!["Online".to_string()],
            avatar: AVATAR_URL.to_string(),
            experience: 8,
            availability: "Disponible mañana".to_string(),
        },
        Professional {
            id: Uuid::new_v4(),
            name: "Lic. Ana Martínez".to_string(),
            specialty: "Psicóloga Infantil".to_string(),
            description: "Especializada en niños y adolescentes. Ayudo a familias a superar \
                          dificultades emocionales y de comportamiento."
                .to_string(),
            rating: 5.0,
            reviews: 156,
            price: 50,
            location: "Valencia, España".to_string(),
            modality: vec!["Presencial".to_string(), "Online".to_string()],
            avatar: AVATAR_URL.to_string(),
            experience: 12,
            availability: "Disponible esta semana".to_string(),
        },
        Professional {
            id: Uuid::new_v4(),
            name: "Dr. Luis Fernández".to_string(),
            specialty: "Psiquiatra".to_string(),
            description: "Tratamiento integral de trastornos de ansiedad, depresión y \
                          trastornos del estado de ánimo. Enfoque holístico."
                .to_string(),
            rating: 4.7,
            reviews: 84,
            price: 80,
            location: "Sevilla, España".to_string(),
            modality: vec!["Presencial".to_string()],
            avatar: AVATAR_URL.to_string(),
            experience: 15,
            availability: "Próxima semana".to_string(),
        },
        Professional {
            id: Uuid::new_v4(),
            name: "Lic. Isabel Ruiz".to_string(),
            specialty: "Coach de Vida".to_string(),
            description: "Te ayudo a descubrir tu potencial, establecer metas y crear la vida \
                          que deseas. Especializada en autoestima y propósito."
                .to_string(),
            rating: 4.9,
            reviews: 112,
            price: 45,
            location: "Málaga, España".to_string(),
            modality: vec!["Online".to_string()],
            avatar: AVATAR_URL.to_string(),
            experience: 6,
            availability: "Disponible hoy".to_string(),
        },
        Professional {
            id: Uuid::new_v4(),
            name: "Dr. Roberto Silva".to_string(),
            specialty: "Terapeuta de Pareja".to_string(),
            description: "Ayudo a parejas a mejorar su comunicación, resolver conflictos y \
                          fortalecer su relación."
                .to_string(),
            rating: 4.8,
            reviews: 91,
            price: 70,
            location: "Bilbao, España".to_string(),
            modality: vec!["Presencial".to_string(), "Online".to_string()],
            avatar: AVATAR_URL.to_string(),
            experience: 9,
            availability: "Disponible esta semana".to_string(),
        },
    ]
}

/// Every profile shows the same demo review trio.
pub fn sample_reviews(professionals: &[Professional]) -> Vec<ProfessionalReview> {
    let trio = [
        (
            "Laura P.",
            5,
            "Hace 2 semanas",
            "Excelente profesional. Me ha ayudado mucho con mi ansiedad. Muy recomendable.",
        ),
        (
            "Miguel R.",
            5,
            "Hace 1 mes",
            "Gran empatía y profesionalismo. Las sesiones son muy productivas.",
        ),
        (
            "Carmen S.",
            4,
            "Hace 2 meses",
            "Muy buena terapeuta. Me siento mucho mejor después de cada sesión.",
        ),
    ];

    professionals
        .iter()
        .flat_map(|professional| {
            trio.iter().map(|(author, rating, posted, comment)| ProfessionalReview {
                id: Uuid::new_v4(),
                professional_id: professional.id,
                author: author.to_string(),
                rating: *rating,
                posted: posted.to_string(),
                comment: comment.to_string(),
            })
        })
        .collect()
}

pub fn sample_appointments(professionals: &[Professional]) -> Vec<Appointment> {
    let today = Utc::now().date_naive();
    let snapshot = |index: usize| {
        let professional = &professionals[index];
        (
            professional.name.clone(),
            professional.specialty.clone(),
            professional.avatar.clone(),
        )
    };

    let (maria, maria_specialty, maria_avatar) = snapshot(0);
    let (carlos, carlos_specialty, carlos_avatar) = snapshot(1);
    let (ana, ana_specialty, ana_avatar) = snapshot(2);

    vec![
        Appointment {
            id: Uuid::new_v4(),
            professional: maria.clone(),
            specialty: maria_specialty.clone(),
            date: today + Duration::days(5),
            time: "10:00".to_string(),
            modality: "Videollamada".to_string(),
            avatar: maria_avatar.clone(),
            status: AppointmentStatus::Upcoming,
            created_at: Utc::now(),
        },
        Appointment {
            id: Uuid::new_v4(),
            professional: carlos,
            specialty: carlos_specialty,
            date: today + Duration::days(9),
            time: "16:30".to_string(),
            modality: "Presencial".to_string(),
            avatar: carlos_avatar,
            status: AppointmentStatus::Upcoming,
            created_at: Utc::now(),
        },
        Appointment {
            id: Uuid::new_v4(),
            professional: ana,
            specialty: ana_specialty,
            date: today + Duration::days(3),
            time: "11:00".to_string(),
            modality: "Online".to_string(),
            avatar: ana_avatar,
            status: AppointmentStatus::Upcoming,
            created_at: Utc::now(),
        },
        Appointment {
            id: Uuid::new_v4(),
            professional: maria,
            specialty: maria_specialty,
            date: today - Duration::days(5),
            time: "10:00".to_string(),
            modality: "Videollamada".to_string(),
            avatar: maria_avatar,
            status: AppointmentStatus::Completed,
            created_at: Utc::now(),
        },
    ]
}

pub fn sample_content() -> Vec<ContentItem> {
    let image = |slug: &str| format!("https://images.unsplash.com/{}?w=400&h=250&fit=crop", slug);

    vec![
        ContentItem {
            id: Uuid::new_v4(),
            title: "5 técnicas de respiración para calmar la ansiedad".to_string(),
            description: "Aprende ejercicios de respiración efectivos que puedes usar en \
                          cualquier momento para reducir la ansiedad y encontrar calma."
                .to_string(),
            content_type: ContentType::Article,
            category: "Ansiedad".to_string(),
            duration: "5 min".to_string(),
            image: image("photo-1716816211509-6e7b2c82d845"),
            is_favorite: false,
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Meditación guiada para dormir mejor".to_string(),
            description: "Una meditación relajante diseñada para ayudarte a conciliar el sueño \
                          y mejorar la calidad de tu descanso nocturno."
                .to_string(),
            content_type: ContentType::Podcast,
            category: "Sueño".to_string(),
            duration: "15 min".to_string(),
            image: image("photo-1635545999375-057ee4013deb"),
            is_favorite: true,
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Construyendo una autoestima saludable".to_string(),
            description: "Descubre estrategias prácticas para desarrollar una autoestima \
                          sólida y mejorar tu relación contigo mismo."
                .to_string(),
            content_type: ContentType::Video,
            category: "Autoestima".to_string(),
            duration: "12 min".to_string(),
            image: image("photo-1604881991720-f91add269bed"),
            is_favorite: false,
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Ejercicio de gratitud diaria".to_string(),
            description: "Un ejercicio práctico para cultivar la gratitud y mejorar tu \
                          bienestar emocional día a día."
                .to_string(),
            content_type: ContentType::Exercise,
            category: "Mindfulness".to_string(),
            duration: "10 min".to_string(),
            image: image("photo-1716816211509-6e7b2c82d845"),
            is_favorite: false,
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Gestión del estrés laboral".to_string(),
            description: "Técnicas efectivas para manejar el estrés en el trabajo y mantener \
                          un equilibrio saludable vida-trabajo."
                .to_string(),
            content_type: ContentType::Article,
            category: "Estrés".to_string(),
            duration: "8 min".to_string(),
            image: image("photo-1604881991720-f91add269bed"),
            is_favorite: true,
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Mindfulness para principiantes".to_string(),
            description: "Introducción práctica al mindfulness con ejercicios simples que \
                          puedes incorporar a tu rutina diaria."
                .to_string(),
            content_type: ContentType::Video,
            category: "Mindfulness".to_string(),
            duration: "18 min".to_string(),
            image: image("photo-1635545999375-057ee4013deb"),
            is_favorite: false,
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Podcast: Superando la procrastinación".to_string(),
            description: "Conversación con expertos sobre las causas de la procrastinación y \
                          cómo superarla efectivamente."
                .to_string(),
            content_type: ContentType::Podcast,
            category: "Productividad".to_string(),
            duration: "25 min".to_string(),
            image: image("photo-1716816211509-6e7b2c82d845"),
            is_favorite: false,
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Ejercicio de relajación muscular progresiva".to_string(),
            description: "Aprende a liberar la tensión física y mental con esta técnica de \
                          relajación paso a paso."
                .to_string(),
            content_type: ContentType::Exercise,
            category: "Ansiedad".to_string(),
            duration: "12 min".to_string(),
            image: image("photo-1635545999375-057ee4013deb"),
            is_favorite: false,
        },
    ]
}
