use common::{
    dish::DishBook,
    ingredient::{IngredientList, IngredientType},
};
use kitchen::{
    scoring::rank_catalog, Catalog, CookingSession, LedgerSink, PlayerStats, RecipeBook,
    SessionState,
};

const INGREDIENTS: &str = r#"{
    "ingredientItems": [
        { "id": "ing-potato", "name": "Potato", "type": "Potato", "score": 10 },
        { "id": "ing-onion", "name": "Onion", "type": "Onion", "score": 5 },
        { "id": "ing-meat", "name": "Meat", "type": "Meat", "score": 20 }
    ]
}"#;

const DISHES: &str = r#"{
    "dishes": [
        {
            "name": "Stew",
            "requiredIngredients": [
                { "ingredientType": "Potato", "minIngredients": 1, "maxIngredients": 4 },
                { "ingredientType": "Meat", "minIngredients": 1, "maxIngredients": 4 }
            ]
        },
        {
            "name": "Mash",
            "requiredIngredients": [
                { "ingredientType": "Potato", "minIngredients": 2, "maxIngredients": 4 }
            ]
        }
    ],
    "defaultDishName": "Mystery Mix"
}"#;

fn load() -> (Catalog, RecipeBook) {
    let list: IngredientList = serde_json::from_str(INGREDIENTS).unwrap();
    let book: DishBook = serde_json::from_str(DISHES).unwrap();

    (
        Catalog::from_list(list).unwrap(),
        RecipeBook::try_from(book).unwrap(),
    )
}

#[test]
fn cooks_several_dishes_into_stats() {
    let (catalog, recipes) = load();
    let mut stats = PlayerStats::default();

    {
        let mut session = CookingSession::new(&catalog, &recipes, 3).unwrap();
        session.subscribe(Box::new(LedgerSink::new(&mut stats)));

        for kind in [IngredientType::Potato, IngredientType::Potato, IngredientType::Onion] {
            session.add_by_type(kind).unwrap();
        }
        assert_eq!(session.dish().map(|dish| dish.name.as_str()), Some("Mash"));
        session.reset();

        for kind in [IngredientType::Potato, IngredientType::Meat, IngredientType::Onion] {
            session.add_by_type(kind).unwrap();
        }
        assert_eq!(session.dish().map(|dish| dish.name.as_str()), Some("Stew"));
        session.reset();
        assert_eq!(session.state(), SessionState::Empty);
    }

    // 2*10*2.0 + 5 = 45, then (10 + 20 + 5) * 2 = 70
    assert_eq!(stats.score(), 115);
    assert_eq!(stats.best_dish().name, "Stew");
    assert_eq!(stats.best_dish().score, 70);
    assert_eq!(stats.last_dish().describe(), "Stew (1 potato, 1 meat, 1 onion) [70]");
}

#[test]
fn overrides_change_scoring() {
    let (mut catalog, _) = load();
    let patch: IngredientList = serde_json::from_str(
        r#"{ "ingredientItems": [
            { "id": "ing-onion", "name": "Shallot", "type": "Onion", "score": 8 },
            { "id": "ing-carrot", "name": "Carrot", "type": "Carrot", "score": 3 }
        ] }"#,
    )
    .unwrap();

    assert_eq!(catalog.apply_overrides(&patch.ingredient_items), 1);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.find_by_type(IngredientType::Onion).unwrap().name, "Shallot");
    assert!(catalog.find_by_type(IngredientType::Carrot).is_err());

    let ranked = rank_catalog(&catalog, 1).unwrap();
    let names = ranked
        .iter()
        .map(|combination| combination.ingredients[0].name.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(names, vec!["Meat", "Potato", "Shallot"]);
}

#[test]
fn ranked_catalog_listing_is_ordered() {
    let (catalog, recipes) = load();
    let ranked = rank_catalog(&catalog, 3).unwrap();

    assert_eq!(ranked.len(), 10);
    assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));

    let best = &ranked[0];
    // 2 * 20 * 2.0 + 10
    assert_eq!(best.score, 90);
    assert_eq!(recipes.select(&best.ingredients), "Stew");
    assert_eq!(best.summary(), vec!["2 Meat", "1 Potato"]);
}
