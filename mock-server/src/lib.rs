//! Mock implementation of the dessert endpoints of a TheMealDB-compatible
//! recipe API, for integration tests and local development.
//!
//! Serves `filter.php` and `lookup.php` from a fixed fixture catalog and
//! mirrors the live API's quirks: every response is 200, queries that
//! match nothing answer `{"meals": null}`, and detail records carry all
//! twenty numbered ingredient/measure slots with empty strings in the
//! unused ones.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Category the fixture catalog answers to.
pub const CATEGORY: &str = "Dessert";

/// Number of numbered ingredient/measure slot pairs in a detail record.
const INGREDIENT_SLOTS: usize = 20;

/// One fixture recipe served by the mock API.
#[derive(Clone, Debug)]
pub struct Meal {
    pub id: &'static str,
    pub name: &'static str,
    pub thumb: &'static str,
    pub area: &'static str,
    pub instructions: &'static str,
    pub ingredients: &'static [(&'static str, &'static str)],
}

pub type Catalog = Arc<Vec<Meal>>;

#[derive(Deserialize)]
struct FilterParams {
    c: Option<String>,
}

#[derive(Deserialize)]
struct LookupParams {
    i: Option<String>,
}

/// Router over the default fixture catalog.
pub fn app() -> Router {
    app_with(catalog())
}

/// Router over a caller-supplied catalog, for tests that need a particular
/// fixture shape.
pub fn app_with(meals: Vec<Meal>) -> Router {
    let catalog: Catalog = Arc::new(meals);
    Router::new()
        .route("/api/json/v1/1/filter.php", get(filter_meals))
        .route("/api/json/v1/1/lookup.php", get(lookup_meal))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// `GET /filter.php?c=...` — summaries for the dessert category, the live
/// API's `{"meals": null}` for any other or missing category.
async fn filter_meals(
    State(catalog): State<Catalog>,
    Query(params): Query<FilterParams>,
) -> Json<Value> {
    if params.c.as_deref() != Some(CATEGORY) {
        return Json(json!({ "meals": null }));
    }
    let meals: Vec<Value> = catalog
        .iter()
        .map(|meal| {
            json!({
                "strMeal": meal.name,
                "strMealThumb": meal.thumb,
                "idMeal": meal.id,
            })
        })
        .collect();
    Json(json!({ "meals": meals }))
}

/// `GET /lookup.php?i=...` — a single-element array for a known id,
/// `{"meals": null}` for an unknown, empty, or missing one.
async fn lookup_meal(
    State(catalog): State<Catalog>,
    Query(params): Query<LookupParams>,
) -> Json<Value> {
    let found = params
        .i
        .as_deref()
        .and_then(|id| catalog.iter().find(|meal| meal.id == id));
    match found {
        Some(meal) => Json(json!({ "meals": [detail_json(meal)] })),
        None => Json(json!({ "meals": null })),
    }
}

/// Serialize a fixture the way the live API does: all twenty slot pairs
/// present, unused ones as empty strings, plus the metadata fields this
/// client is expected to ignore.
fn detail_json(meal: &Meal) -> Value {
    let mut record = Map::new();
    record.insert("idMeal".to_string(), json!(meal.id));
    record.insert("strMeal".to_string(), json!(meal.name));
    record.insert("strCategory".to_string(), json!(CATEGORY));
    record.insert("strArea".to_string(), json!(meal.area));
    record.insert("strInstructions".to_string(), json!(meal.instructions));
    record.insert("strMealThumb".to_string(), json!(meal.thumb));
    record.insert("strTags".to_string(), Value::Null);
    record.insert("strYoutube".to_string(), json!(""));
    for slot in 0..INGREDIENT_SLOTS {
        let (ingredient, measure) = meal.ingredients.get(slot).copied().unwrap_or(("", ""));
        record.insert(format!("strIngredient{}", slot + 1), json!(ingredient));
        record.insert(format!("strMeasure{}", slot + 1), json!(measure));
    }
    Value::Object(record)
}

/// Default fixture catalog, deliberately not in alphabetical order so
/// order-sensitive tests can tell server order from sorted order.
pub fn catalog() -> Vec<Meal> {
    vec![
        Meal {
            id: "52767",
            name: "Bakewell tart",
            thumb: "https://www.themealdb.com/images/media/meals/wyrqqq1468233628.jpg",
            area: "British",
            instructions: "To make the pastry, measure the flour into a bowl and rub in the butter until the mixture resembles fine breadcrumbs. Add the water, mixing to form a soft dough.\r\nRoll out the dough and line a 20cm flan tin. Spread the base with jam.\r\nBeat the butter and sugar, add the eggs, almonds and extract, then pour into the case and scatter with flaked almonds.\r\nBake for about 35 minutes until golden.",
            ingredients: &[
                ("plain flour", "175g"),
                ("chilled butter", "75g"),
                ("cold water", "2-3 tbsp"),
                ("raspberry jam", "1 tbsp"),
                ("butter", "125g"),
                ("caster sugar", "125g"),
                ("free-range eggs, beaten", "2"),
                ("ground almonds", "125g"),
                ("almond extract", "1 tsp"),
                ("flaked almonds", "50g"),
            ],
        },
        Meal {
            id: "52768",
            name: "Apple Frangipan Tart",
            thumb: "https://www.themealdb.com/images/media/meals/wxywrq1468235067.jpg",
            area: "British",
            instructions: "Preheat the oven to 200C/180C Fan/Gas 6.\r\nPut the biscuits in a large re-sealable freezer bag and bash with a rolling pin into fine crumbs. Melt the butter, stir in the crumbs and press into the tin.\r\nCream the butter and sugar, beat in the eggs, then fold in the ground almonds and almond extract. Arrange the apples over the base, spoon over the filling and top with flaked almonds.\r\nBake for 20-25 minutes until golden and set.",
            ingredients: &[
                ("digestive biscuits", "175g/6oz"),
                ("butter", "75g/3oz"),
                ("Bramley apples", "200g/7oz"),
                ("butter, softened", "75g/3oz"),
                ("caster sugar", "75g/3oz"),
                ("free-range eggs", "2"),
                ("ground almonds", "75g/3oz"),
                ("almond extract", "1 tsp"),
                ("flaked almonds", "50g/1¾oz"),
            ],
        },
        Meal {
            id: "52893",
            name: "Apple & Blackberry Crumble",
            thumb: "https://www.themealdb.com/images/media/meals/xvsurr1511719182.jpg",
            area: "British",
            instructions: "Heat oven to 190C/170C fan/gas 5.\r\nTip the flour and sugar into a large bowl, add the butter and rub in until the mixture looks like breadcrumbs.\r\nPeel, core and cut the apples, cook with butter and sugar for 3 mins, then add the blackberries.\r\nSpoon the fruit into a dish, top with the crumble mix and bake for 30-35 mins until golden.",
            ingredients: &[
                ("Plain Flour", "120g"),
                ("Caster Sugar", "60g"),
                ("Butter", "60g"),
                ("Braeburn Apples", "300g"),
                ("Butter", "30g"),
                ("Demerara Sugar", "30g"),
                ("Blackberries", "120g"),
                ("Cinnamon", "¼ tsp"),
                ("Ice Cream", "to serve"),
            ],
        },
        Meal {
            id: "52894",
            name: "Battenberg Cake",
            thumb: "https://www.themealdb.com/images/media/meals/ywwrsp1511720277.jpg",
            area: "British",
            instructions: "Heat oven to 180C/160C fan/gas 4 and line the tin.\r\nBeat together the butter, sugar, flour, almonds, baking powder, eggs and vanilla until smooth. Colour half the mixture pink and bake the two halves.\r\nTrim the sponges, stack into a checkerboard, sticking with jam, then wrap in marzipan.",
            ingredients: &[
                ("Butter, Softened", "175g"),
                ("Caster Sugar", "175g"),
                ("Self-raising Flour", "140g"),
                ("Ground Almonds", "50g"),
                ("Baking Powder", "½ tsp"),
                ("Eggs", "3 Medium"),
                ("Vanilla Extract", "½ tsp"),
                ("Almond Extract", "¼ tsp"),
                ("Pink Food Colouring", "½ tsp"),
                ("Apricot Jam", "200g"),
                ("Marzipan", "1kg"),
                ("Icing Sugar", "to dust"),
            ],
        },
    ]
}
