use screen_form::{messages, present, reads_as_negative, Tone};
use screen_model::Label;
use screen_schema::Domain;

#[test]
fn messages_are_distinct_and_exactly_one_reads_negative() {
    let mut all = Vec::new();
    for domain in Domain::ALL {
        let (positive, negative) = messages(domain);
        assert_ne!(positive, negative);
        assert_eq!(
            [positive, negative]
                .iter()
                .filter(|m| reads_as_negative(m))
                .count(),
            1,
            "{domain}"
        );
        all.push(positive);
        all.push(negative);
    }
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 6);
}

#[test]
fn tone_follows_label_not_wording() {
    for domain in Domain::ALL {
        assert_eq!(present(domain, Label::Positive).tone, Tone::Error);
        assert_eq!(present(domain, Label::Negative).tone, Tone::Success);
    }
}

#[test]
fn exact_wording() {
    assert_eq!(
        present(Domain::HeartDisease, Label::Positive).message,
        "The person is having heart disease"
    );
    assert_eq!(
        present(Domain::HeartDisease, Label::Negative).message,
        "The person does not have any heart disease"
    );
    assert_eq!(
        present(Domain::Parkinsons, Label::Positive).message,
        "The person has Parkinson's disease"
    );
}
