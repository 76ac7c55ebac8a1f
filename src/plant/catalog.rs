/// Static generator catalog: the five plant kinds and their base economics.

/// Kinds of generators, in progression order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Solar,
    Wind,
    Coal,
    Nuclear,
    Fusion,
}

impl GeneratorKind {
    /// All generator kinds in display order.
    pub fn all() -> &'static [GeneratorKind] {
        &[
            GeneratorKind::Solar,
            GeneratorKind::Wind,
            GeneratorKind::Coal,
            GeneratorKind::Nuclear,
            GeneratorKind::Fusion,
        ]
    }

    /// Position in [`GeneratorKind::all`].
    pub fn index(self) -> usize {
        match self {
            GeneratorKind::Solar => 0,
            GeneratorKind::Wind => 1,
            GeneratorKind::Coal => 2,
            GeneratorKind::Nuclear => 3,
            GeneratorKind::Fusion => 4,
        }
    }

    /// Stable identifier, used as the key in save files.
    pub fn id(self) -> &'static str {
        match self {
            GeneratorKind::Solar => "solar",
            GeneratorKind::Wind => "wind",
            GeneratorKind::Coal => "coal",
            GeneratorKind::Nuclear => "nuclear",
            GeneratorKind::Fusion => "fusion",
        }
    }

    pub fn from_id(id: &str) -> Option<GeneratorKind> {
        GeneratorKind::all().iter().copied().find(|k| k.id() == id)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Solar => "Solar",
            GeneratorKind::Wind => "Wind",
            GeneratorKind::Coal => "Coal",
            GeneratorKind::Nuclear => "Nuclear",
            GeneratorKind::Fusion => "Fusion",
        }
    }

    /// Cost of the first unit.
    pub fn base_cost(self) -> f64 {
        match self {
            GeneratorKind::Solar => 10.0,
            GeneratorKind::Wind => 100.0,
            GeneratorKind::Coal => 500.0,
            GeneratorKind::Nuclear => 3_000.0,
            GeneratorKind::Fusion => 20_000.0,
        }
    }

    /// Generation contributed per owned unit.
    pub fn power(self) -> f64 {
        match self {
            GeneratorKind::Solar => 5.0,
            GeneratorKind::Wind => 15.0,
            GeneratorKind::Coal => 50.0,
            GeneratorKind::Nuclear => 200.0,
            GeneratorKind::Fusion => 1_000.0,
        }
    }

    /// Currency per second per owned unit.
    pub fn income(self) -> f64 {
        match self {
            GeneratorKind::Solar => 2.0,
            GeneratorKind::Wind => 8.0,
            GeneratorKind::Coal => 30.0,
            GeneratorKind::Nuclear => 150.0,
            GeneratorKind::Fusion => 800.0,
        }
    }

    /// Hotkey that buys one unit.
    pub fn key(self) -> char {
        match self {
            GeneratorKind::Solar => '1',
            GeneratorKind::Wind => '2',
            GeneratorKind::Coal => '3',
            GeneratorKind::Nuclear => '4',
            GeneratorKind::Fusion => '5',
        }
    }

    pub fn from_key(key: char) -> Option<GeneratorKind> {
        GeneratorKind::all().iter().copied().find(|k| k.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_kinds_in_index_order() {
        assert_eq!(GeneratorKind::all().len(), 5);
        for (i, kind) in GeneratorKind::all().iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn progression_is_strictly_increasing() {
        for pair in GeneratorKind::all().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(b.base_cost() > a.base_cost(), "{:?} -> {:?}", a, b);
            assert!(b.power() > a.power(), "{:?} -> {:?}", a, b);
            assert!(b.income() > a.income(), "{:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn id_lookup_roundtrips() {
        for &kind in GeneratorKind::all() {
            assert_eq!(GeneratorKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(GeneratorKind::from_id("geothermal"), None);
    }

    #[test]
    fn hotkeys_are_one_through_five() {
        assert_eq!(GeneratorKind::from_key('1'), Some(GeneratorKind::Solar));
        assert_eq!(GeneratorKind::from_key('5'), Some(GeneratorKind::Fusion));
        assert_eq!(GeneratorKind::from_key('6'), None);
    }

    #[test]
    fn solar_matches_reference_scenario() {
        assert!((GeneratorKind::Solar.base_cost() - 10.0).abs() < f64::EPSILON);
        assert!((GeneratorKind::Solar.income() - 2.0).abs() < f64::EPSILON);
    }
}
