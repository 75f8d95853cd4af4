use migration::Migrator;

#[test]
fn steps_are_ordered_by_dependency() {
    let names: Vec<&str> = Migrator::steps().iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        [
            "m0001_create_players",
            "m0002_create_deaths",
            "m0003_create_level_attempts",
            "m0004_add_player_profile",
        ]
    );
}
