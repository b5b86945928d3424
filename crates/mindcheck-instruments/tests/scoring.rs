use mindcheck_instruments::error::InstrumentError;
use mindcheck_instruments::labels::Locale;
use mindcheck_instruments::bands::{GadBand, K10Band, PhqBand};
use mindcheck_instruments::scoring::{AnswerSet, AsqAnswers, total};
use mindcheck_instruments::{InstrumentId, all_instruments, get_instrument};

#[test]
fn total_skips_unanswered_items() {
    assert_eq!(total(&[Some(1), None, Some(3)]), 4);
    assert_eq!(total(&[None, None]), 0);
    assert_eq!(total(&[]), 0);
}

#[test]
fn answer_sets_have_fixed_lengths() {
    assert_eq!(AnswerSet::new(InstrumentId::Phq9a).len(), 9);
    assert_eq!(AnswerSet::new(InstrumentId::Gad7).len(), 7);
    assert_eq!(AnswerSet::new(InstrumentId::K10).len(), 10);
    assert_eq!(AsqAnswers::new().len(), 4);
}

#[test]
fn answer_set_tracks_completion() {
    let mut gad = AnswerSet::new(InstrumentId::Gad7);
    assert!(!gad.is_complete());
    assert_eq!(gad.unanswered().count(), 7);

    for i in 0..7 {
        gad.set(i, 2).unwrap();
    }
    assert!(gad.is_complete());
    assert_eq!(gad.total(), 14);
    assert_eq!(gad.unanswered().next(), None);
}

#[test]
fn partial_answer_set_totals_answered_items_only() {
    let mut phq = AnswerSet::new(InstrumentId::Phq9a);
    phq.set(0, 3).unwrap();
    phq.set(4, 2).unwrap();
    assert_eq!(phq.total(), 5);
    assert_eq!(phq.unanswered().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn answers_may_be_changed() {
    let mut phq = AnswerSet::new(InstrumentId::Phq9a);
    phq.set(2, 3).unwrap();
    phq.set(2, 1).unwrap();
    assert_eq!(phq.get(2), Some(1));
    assert_eq!(phq.total(), 1);
}

#[test]
fn out_of_domain_response_is_rejected() {
    let mut phq = AnswerSet::new(InstrumentId::Phq9a);
    let err = phq.set(0, 4).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::InvalidResponse { instrument: InstrumentId::Phq9a, index: 0, value: 4 }
    ));
    assert_eq!(phq.get(0), None);

    let mut k10 = AnswerSet::new(InstrumentId::K10);
    assert!(k10.set(0, 0).is_err());
    assert!(k10.set(0, 5).is_ok());
}

#[test]
fn index_past_end_is_rejected() {
    let mut gad = AnswerSet::new(InstrumentId::Gad7);
    let err = gad.set(7, 1).unwrap_err();
    assert!(matches!(err, InstrumentError::ItemOutOfRange { index: 7, len: 7, .. }));

    let mut asq = AsqAnswers::new();
    assert!(asq.set(4, true).is_err());
}

#[test]
fn asq_any_yes() {
    let mut asq = AsqAnswers::new();
    assert!(!asq.any_yes());
    asq.set(2, true).unwrap();
    assert!(asq.any_yes());
    asq.set(2, false).unwrap();
    assert!(!asq.any_yes());
}

#[test]
fn catalogue_lists_instruments_in_questionnaire_order() {
    let ids: Vec<_> = all_instruments().iter().map(|i| i.id()).collect();
    assert_eq!(
        ids,
        vec![InstrumentId::Phq9a, InstrumentId::Gad7, InstrumentId::K10, InstrumentId::Asq]
    );
}

#[test]
fn max_totals_match_published_ranges() {
    assert_eq!(get_instrument("phq9a").unwrap().max_total(), 27);
    assert_eq!(get_instrument("gad7").unwrap().max_total(), 21);
    assert_eq!(get_instrument("k10").unwrap().max_total(), 50);
    assert!(get_instrument("bdi").is_none());
}

#[test]
fn instrument_id_round_trips_through_str() {
    for instrument in all_instruments() {
        let id = instrument.id();
        assert_eq!(id.as_str().parse::<InstrumentId>().unwrap(), id);
    }
    assert!("phq9".parse::<InstrumentId>().is_err());
}

#[test]
fn every_band_has_a_label_in_every_locale() {
    let phq = [
        PhqBand::None,
        PhqBand::Mild,
        PhqBand::Moderate,
        PhqBand::ModeratelySevere,
        PhqBand::Severe,
    ];
    let gad = [GadBand::None, GadBand::Mild, GadBand::Moderate, GadBand::Severe];
    let k10 = [K10Band::Low, K10Band::Medium, K10Band::High, K10Band::VeryHigh];

    for locale in [Locale::Ko, Locale::En] {
        assert!(phq.iter().all(|b| !b.label(locale).is_empty()));
        assert!(gad.iter().all(|b| !b.label(locale).is_empty()));
        assert!(k10.iter().all(|b| !b.label(locale).is_empty()));
    }

    assert_eq!(PhqBand::ModeratelySevere.label(Locale::Ko), "중등도-중증");
    assert_eq!(K10Band::VeryHigh.label(Locale::En), "Very high");
    assert_eq!(Locale::default(), Locale::Ko);
}
