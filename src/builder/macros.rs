//! Macros for ergonomic puzzle construction.

/// Declare a puzzle inline. Expands to a [`PuzzleBuilder`](crate::builder::PuzzleBuilder)
/// chain and evaluates to `Result<Puzzle, BuildError>`.
///
/// Fields must appear in this order; `locations`, `capacity`, `unsafe` and
/// `actions` are optional.
///
/// # Example
///
/// ```
/// use crossing::puzzle;
///
/// let puzzle = puzzle! {
///     carrier: "farmer",
///     entities: ["fox", "goose", "grain"],
///     origin: "near",
///     destination: "far",
///     capacity: 1,
///     unsafe: [["fox", "goose"], ["goose", "grain"]],
/// }
/// .unwrap();
///
/// assert_eq!(puzzle.entity_count(), 4);
/// ```
#[macro_export]
macro_rules! puzzle {
    (
        carrier: $carrier:expr,
        entities: [$($entity:expr),* $(,)?],
        $(locations: [$($location:expr),* $(,)?],)?
        origin: $origin:expr,
        destination: $destination:expr
        $(, capacity: $capacity:expr)?
        $(, unsafe: [$([$($member:expr),* $(,)?]),* $(,)?])?
        $(, actions: [$($action:expr),* $(,)?])?
        $(,)?
    ) => {{
        let builder = $crate::builder::PuzzleBuilder::new()
            $(.entity($entity))*
            .carrier($carrier)
            $($(.location($location))*)?
            .origin($origin)
            .destination($destination);
        $(let builder = builder.capacity($capacity);)?
        $($(let builder = builder.unsafe_combination([$($member),*]);)*)?
        $(let builder = builder.actions([$($action),*]);)?
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::actions::ActionKind;
    use crate::builder::BuildError;

    #[test]
    fn puzzle_macro_builds_reference_configuration() {
        let puzzle = puzzle! {
            carrier: "farmer",
            entities: ["fox", "goose", "grain"],
            origin: "near",
            destination: "far",
            unsafe: [["fox", "goose"], ["goose", "grain"]],
        }
        .unwrap();

        assert_eq!(puzzle.entity_count(), 4);
        assert_eq!(puzzle.carrier(), puzzle.entity_id("farmer").unwrap());
        assert_eq!(puzzle.unsafe_combinations().len(), 2);
    }

    #[test]
    fn puzzle_macro_supports_locations_and_actions() {
        let puzzle = puzzle! {
            carrier: "ferry",
            entities: ["crate"],
            locations: ["west", "island", "east"],
            origin: "west",
            destination: "east",
            capacity: 2,
            actions: [ActionKind::PickUp, ActionKind::PutDown, ActionKind::TravelTo]
        }
        .unwrap();

        assert_eq!(puzzle.location_count(), 3);
        assert_eq!(puzzle.capacity(), 2);
        assert!(!puzzle.actions().contains(ActionKind::MoveCarrier));
    }

    #[test]
    fn puzzle_macro_surfaces_build_errors() {
        let result = puzzle! {
            carrier: "farmer",
            entities: ["fox"],
            origin: "near",
            destination: "far",
            unsafe: [["fox", "wolf"]],
        };

        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownEntity {
                name: "wolf".to_string()
            }
        );
    }
}
