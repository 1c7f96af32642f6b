use crate::models::{DinnerType, DinnerTypeId, EaterProfile};

/// Longest allowed preparation time, in minutes.
pub const MAX_PREP_TIME_MINUTES: i64 = 30;

/// Cost per standard person must stay strictly below this.
pub const MAX_COST_PER_PERSON: f64 = 3.0;

/// Currency the cost limit is expressed in.
pub const CURRENCY_SYMBOL: &str = "€";

/// AI recipes rated at or below this are dropped from the saved collection.
pub const RATING_KEEP_THRESHOLD: f64 = 2.5;

/// Multiplier used for a diner whose profile id is unknown.
pub const UNKNOWN_PROFILE_MULTIPLIER: f64 = 1.0;

/// Dinner type used for every day of a new weekly plan.
pub const DEFAULT_DINNER_TYPE: DinnerTypeId = DinnerTypeId::Light;

/// Shared guidance for any dinner, embedded in every prompt.
pub const GENERAL_PRINCIPLES: &str = "\
1. Nutritional balance
- Light but complete: dinner should be lighter than lunch, since the body is getting ready to rest.
- Quality protein: fish, chicken, eggs, legumes... they keep you full and help overnight recovery.
- Vegetables: fibre, vitamins and minerals, and they help digestion.
- Light carbohydrates (if extra energy is needed): rice, boiled potato, wholegrain bread... in moderate portions.
- Avoid heavy fats (fried food, fatty cured meats) and fast sugars, which disturb sleep.

2. Digestibility
- Simple cooking: oven, griddle, steam or gentle stews.
- Avoid very large or spicy dinners that can cause reflux or insomnia.
- Leave time before bed: ideally dine at least 2 hours before going to sleep.

3. Context and enjoyment
- Good presentation: cared-for dishes, even simple ones, make the meal more pleasant.
- Atmosphere: soft lighting, a tidy table, calm music if you like.
- Company: a shared dinner is usually enjoyed more than one alone.

4. Practical organisation
- Planning: think about the menu ahead of time to avoid improvising unhealthy food.
- Adapt portions: better slightly satisfied than heavy.
- Hydration: water as the main drink; avoid too much alcohol or sugary soft drinks.
";

/// Selectable dinner types, in menu order.
pub static DINNER_TYPES: [DinnerType; 5] = [
    DinnerType {
        id: DinnerTypeId::Light,
        title: "Light, restorative dinner",
        objective: "Ease digestion and rest (to sleep well).",
        guidelines: "\
- Cooked vegetables (courgette cream, warm salad, griddled asparagus).
- Light protein (white fish, plain omelette, chicken breast).
- A little gentle carbohydrate if needed (boiled potato, wholegrain bread).
- A relaxing herbal tea (lime blossom, chamomile).",
        preferred_ingredients: &[
            "Potato",
            "Carrot",
            "Onion",
            "Courgette",
            "Leek",
            "Green beans",
            "Eggs",
            "Wholegrain bread",
            "Chard",
            "White cabbage",
            "Mushrooms",
        ],
    },
    DinnerType {
        id: DinnerTypeId::MuscleRecovery,
        title: "Muscle recovery",
        objective: "Repair muscle fibres and restore energy (after training).",
        guidelines: "\
- Quality protein (salmon, eggs, legumes, lean meat).
- Vegetables (for micronutrients and fibre).
- Complex carbohydrate (rice, wholegrain pasta, sweet potato) to refill glycogen.
- Water or a natural isotonic drink.",
        preferred_ingredients: &[
            "Eggs",
            "Chicken breast",
            "Turkey",
            "Tinned tuna",
            "Chickpeas",
            "Lentils",
            "Rice",
            "Wholegrain or regular pasta",
            "Spinach",
            "Broccoli",
            "Peppers",
            "Textured soy",
            "Lean pork fillets",
        ],
    },
    DinnerType {
        id: DinnerTypeId::LowCalorie,
        title: "Low-calorie dinner",
        objective: "Feel full without excess calories (if you want to lose weight).",
        guidelines: "\
- Plenty of vegetables (salads, light stir-fry, clear soups).
- Lean protein (chicken, egg whites, fresh cheese).
- Avoid heavy carbohydrates at night.
- Light fruit for dessert (kiwi, berries).",
        preferred_ingredients: &[
            "Lettuce",
            "Tomato",
            "Cucumber",
            "Courgette",
            "Cauliflower",
            "Carrot",
            "Chicken breast",
            "Frozen hake",
            "0% whipped fresh cheese",
            "Natural yoghurt",
            "Green beans",
            "Budget tofu",
        ],
    },
    DinnerType {
        id: DinnerTypeId::Energetic,
        title: "Energising dinner",
        objective: "Load glycogen stores (if you need a lot of energy early the next day).",
        guidelines: "\
- Protein (turkey, fish, egg).
- A good share of complex carbohydrates (pasta, quinoa, wholegrain bread).
- Vegetables to round off digestion.",
        preferred_ingredients: &[
            "Rice",
            "Pasta",
            "Quinoa (bulk, budget)",
            "Wholegrain bread",
            "Oats",
            "Eggs",
            "Chicken",
            "Tomato",
            "Aubergine",
            "Courgette",
            "Boiled potato",
            "Peas",
        ],
    },
    DinnerType {
        id: DinnerTypeId::Social,
        title: "Social or special dinner",
        objective: "Enjoy and share.",
        guidelines: "\
- More elaborate dishes, even with a treat (cheeses, tapas, wine, dessert).
- The experience matters more than nutritional optimisation.",
        preferred_ingredients: &[
            "Spanish omelette",
            "Bread with tomato",
            "Fresh cheese",
            "Cooked ham",
            "Mushrooms",
            "Cultivated wild mushrooms",
            "Mixed salad (lettuce, tomato, onion)",
            "Sardines",
            "Chicken fillets",
            "Homemade croquettes",
            "Baked empanadillas",
        ],
    },
];

/// Appetite profiles in declaration order. Composition summaries follow
/// this order.
pub static EATER_PROFILES: [EaterProfile; 3] = [
    EaterProfile {
        id: "periquito",
        name: "Periquito",
        multiplier: 0.75,
        description: "Eats a little less than usual.",
        icon: "🪶",
    },
    EaterProfile {
        id: "humano",
        name: "Humano",
        multiplier: 1.0,
        description: "One standard serving.",
        icon: "🙂",
    },
    EaterProfile {
        id: "bestia-parda",
        name: "Bestia Parda",
        multiplier: 1.5,
        description: "Has a big appetite.",
        icon: "🔥",
    },
];

/// Look up a dinner type by id. `Custom` has no entry.
pub fn dinner_type(id: DinnerTypeId) -> Option<&'static DinnerType> {
    DINNER_TYPES.iter().find(|t| t.id == id)
}

/// Look up an eater profile by id.
pub fn eater_profile(id: &str) -> Option<&'static EaterProfile> {
    EATER_PROFILES.iter().find(|p| p.id == id)
}
