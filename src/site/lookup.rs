//! Entity lookup
//!
//! Resolves route parameters to trainers and lessons. A miss is an ordinary
//! outcome (stale or mistyped URL) and is returned as `None`.

use super::types::{Lesson, SiteDocument, Trainer};

/// Find a trainer by exact id
pub fn find_trainer<'a>(doc: &'a SiteDocument, id: &str) -> Option<&'a Trainer> {
    doc.trainers.iter().find(|t| t.id == id)
}

/// Find a lesson by its route parameter.
///
/// The parameter is percent-decoded before an exact title comparison. A
/// parameter that does not decode to UTF-8 matches nothing.
pub fn find_lesson<'a>(trainer: &'a Trainer, raw_title: &str) -> Option<&'a Lesson> {
    let title = decode_segment(raw_title)?;
    trainer.schedule.iter().find(|l| l.title == title)
}

/// Resolve both halves of a lesson route
pub fn find_trainer_lesson<'a>(
    doc: &'a SiteDocument,
    trainer_id: &str,
    raw_title: &str,
) -> Option<(&'a Trainer, &'a Lesson)> {
    let trainer = find_trainer(doc, trainer_id)?;
    let lesson = find_lesson(trainer, raw_title)?;
    Some((trainer, lesson))
}

/// Link target for a trainer profile
pub fn trainer_path(id: &str) -> String {
    format!("/trainer/{}", id)
}

/// Link target for a lesson page, with the title percent-encoded
pub fn lesson_path(trainer_id: &str, title: &str) -> String {
    format!(
        "/trainer/{}/lesson/{}",
        trainer_id,
        encode_segment(title)
    )
}

pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

pub fn decode_segment(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> SiteDocument {
        SiteDocument::from_json(
            r#"{
                "trainers": [
                    { "id": "anna", "name": "Anna", "schedule": [
                        { "title": "Yoga", "details": ["Mon 18:00", "Wed 18:00"] },
                        { "title": "Стретчинг & Pilates 50+", "details": ["Tue 10:00"] },
                        { "title": "100% Cardio / HIIT?", "details": [] }
                    ] },
                    { "id": "oleh", "name": "Oleh", "schedule": [] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_trainer_known_ids() {
        let doc = sample_doc();
        for trainer in &doc.trainers {
            assert_eq!(find_trainer(&doc, &trainer.id), Some(trainer));
        }
    }

    #[test]
    fn test_find_trainer_unknown_ids() {
        let doc = sample_doc();
        for id in ["", "Anna", "anna ", "ivan", "anna/lesson"] {
            assert!(find_trainer(&doc, id).is_none(), "unexpected match for {id:?}");
        }
    }

    #[test]
    fn test_lesson_titles_round_trip_through_encoding() {
        let doc = sample_doc();
        let anna = find_trainer(&doc, "anna").unwrap();
        for lesson in &anna.schedule {
            let encoded = encode_segment(&lesson.title);
            assert!(!encoded.contains('/'));
            assert_eq!(find_lesson(anna, &encoded), Some(lesson));
        }
    }

    #[test]
    fn test_lesson_scenario() {
        let doc = sample_doc();
        let (trainer, lesson) = find_trainer_lesson(&doc, "anna", "Yoga").unwrap();
        assert_eq!(trainer.id, "anna");
        assert_eq!(lesson.details, vec!["Mon 18:00", "Wed 18:00"]);

        assert!(find_trainer_lesson(&doc, "anna", "Pilates").is_none());
        assert!(find_trainer_lesson(&doc, "ivan", "Yoga").is_none());
    }

    #[test]
    fn test_invalid_encoding_is_not_found() {
        let doc = sample_doc();
        let anna = find_trainer(&doc, "anna").unwrap();
        assert!(find_lesson(anna, "%FF%FE").is_none());
    }

    #[test]
    fn test_paths() {
        assert_eq!(trainer_path("anna"), "/trainer/anna");
        assert_eq!(lesson_path("anna", "Yoga"), "/trainer/anna/lesson/Yoga");
        assert_eq!(
            lesson_path("anna", "100% Cardio / HIIT?"),
            "/trainer/anna/lesson/100%25%20Cardio%20%2F%20HIIT%3F"
        );
    }
}
