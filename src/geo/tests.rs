// Cross-cutting checks between formatting, parsing and equality
use crate::geo::*;

/// Every accuracy and punctuation combination parses back to the displayed value.
#[test]
fn test_formatted_output_parses_back() {
    let values = [0.0, 0.5, 1.0 / 3.0, 45.999, 89.99, 90.0, -12.3456, -89.5];
    let accuracies = [Accuracy::Degrees, Accuracy::Minutes, Accuracy::Seconds];
    let punctuations = [Punctuation::None, Punctuation::Standard, Punctuation::Colon];

    for value in values {
        let lat = Latitude::from_degrees(value).unwrap();
        for accuracy in accuracies {
            for punctuation in punctuations {
                let text = lat.format(accuracy, punctuation);
                let parsed = Latitude::parse(&text)
                    .unwrap_or_else(|e| panic!("'{text}' failed to parse: {e}"));
                assert_eq!(
                    parsed.format(accuracy, punctuation),
                    text,
                    "re-formatting '{text}' changed it"
                );
            }
        }
    }
}

/// A seconds-accuracy round trip stays within one arc-second of the input.
#[test]
fn test_seconds_round_trip_precision() {
    for value in [-179.9999, -100.25, -0.0003, 0.0, 33.3333, 179.99] {
        let lon = Longitude::from_degrees(value).unwrap();
        let parsed: Longitude = lon.to_string().parse().unwrap();
        assert!(
            (parsed.value() - value).abs() < 1.0 / 3600.0,
            "{value} came back as {}",
            parsed.value()
        );
    }
}

/// Equal angles hash equally so they can key collections.
#[test]
fn test_equal_latitudes_collapse_in_sets() {
    use std::collections::HashSet;

    let set: HashSet<Latitude> = [48.85661, 48.85662, 48.85663]
        .into_iter()
        .map(|v| Latitude::from_degrees(v).unwrap())
        .collect();
    assert_eq!(set.len(), 1);
}

/// Coordinates built from text and from doubles agree.
#[test]
fn test_coordinate_construction_paths_agree() {
    let from_doubles = Coordinate::new(-37.8136, 144.9631).unwrap();
    let from_strings = Coordinate::from_strings("374848S", "1445747E").unwrap();
    assert_eq!(from_doubles, from_strings);
    assert_eq!(from_doubles.to_abbreviated().parse::<Coordinate>().unwrap(), from_doubles);
}
