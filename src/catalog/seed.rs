// ABOUTME: Seed recipe content compiled into the binary
// ABOUTME: Six GLP-1 oriented recipes with per-serving nutrients, method, and nutrition detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use companion_core::models::{CoreNutrients, NutritionDetail, Recipe};

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{IMAGE_BASE}/{photo}?auto=format&fit=crop&w=1080&q=80")
}

/// The compiled-in recipes, in display order
#[must_use]
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Mediterranean Power Bowl", CoreNutrients::new(35.0, 8.0, 420.0))
            .with_image(image("photo-1622484212239-7f8a0d790847"))
            .with_prep_time(25)
            .with_servings(2)
            .with_likes(870)
            .with_tags(["High Protein", "High Fibre", "GLP-1 Friendly", "Lunch"])
            .with_ingredients(&[
                "200g cooked chicken breast, sliced",
                "150g cooked quinoa",
                "120g chickpeas, drained",
                "1 cucumber, diced",
                "10 cherry tomatoes, halved",
                "2 tbsp hummus",
                "1 tbsp olive oil and lemon juice",
            ])
            .with_instructions(&[
                "Divide the quinoa between two bowls.",
                "Top with chicken, chickpeas, cucumber, and tomatoes.",
                "Add a spoon of hummus to each bowl.",
                "Dress with olive oil and lemon juice just before serving.",
            ])
            .with_nutrition(NutritionDetail {
                carbs_g: 38.0,
                sugar_g: 6.0,
                fat_g: 14.0,
                saturated_fat_g: 2.5,
                sodium_mg: 480.0,
            }),
        Recipe::new(2, "Grilled Chicken Garden Salad", CoreNutrients::new(42.0, 6.0, 380.0))
            .with_image(image("photo-1604909052743-94e838986d24"))
            .with_prep_time(20)
            .with_servings(1)
            .with_likes(1245)
            .with_tags(["High Protein", "Low Calorie", "Quick", "Lunch"])
            .with_ingredients(&[
                "150g chicken breast",
                "2 handfuls mixed leaves",
                "1/2 avocado, sliced",
                "1/2 red pepper, sliced",
                "1 tbsp balsamic vinegar",
            ])
            .with_instructions(&[
                "Grill the chicken for 6-7 minutes per side until cooked through.",
                "Rest for 5 minutes, then slice.",
                "Toss the leaves, pepper, and avocado with the vinegar.",
                "Top with the sliced chicken.",
            ])
            .with_nutrition(NutritionDetail {
                carbs_g: 14.0,
                sugar_g: 7.0,
                fat_g: 16.0,
                saturated_fat_g: 3.0,
                sodium_mg: 390.0,
            }),
        Recipe::new(
            3,
            "Herb-Crusted Salmon with Roasted Vegetables",
            CoreNutrients::new(38.0, 7.0, 445.0),
        )
        .with_image(image("photo-1746783840967-738ea85b0f25"))
        .with_prep_time(35)
        .with_servings(2)
        .with_likes(2103)
        .with_tags(["High Protein", "Omega-3", "Dinner"])
        .with_ingredients(&[
            "2 salmon fillets",
            "2 tbsp chopped parsley and dill",
            "1 courgette, chopped",
            "1 red onion, cut into wedges",
            "200g broccoli florets",
            "1 tbsp olive oil",
        ])
        .with_instructions(&[
            "Heat the oven to 200C.",
            "Toss the vegetables in olive oil and roast for 15 minutes.",
            "Press the herbs onto the salmon and add it to the tray.",
            "Roast for a further 12-15 minutes until the salmon flakes.",
        ])
        .with_nutrition(NutritionDetail {
            carbs_g: 20.0,
            sugar_g: 8.0,
            fat_g: 22.0,
            saturated_fat_g: 4.0,
            sodium_mg: 320.0,
        }),
        Recipe::new(4, "Protein-Packed Veggie Scramble", CoreNutrients::new(28.0, 5.0, 320.0))
            .with_image(image("photo-1611730437448-f273048b4be1"))
            .with_prep_time(15)
            .with_servings(1)
            .with_likes(945)
            .with_tags(["High Protein", "Breakfast", "Quick"])
            .with_ingredients(&[
                "3 eggs",
                "50g cottage cheese",
                "1 handful spinach",
                "4 mushrooms, sliced",
                "1 slice wholegrain toast",
            ])
            .with_instructions(&[
                "Soften the mushrooms and spinach in a non-stick pan.",
                "Beat the eggs with the cottage cheese and pour into the pan.",
                "Stir gently over a low heat until just set.",
                "Serve on the toast.",
            ])
            .with_nutrition(NutritionDetail {
                carbs_g: 16.0,
                sugar_g: 3.0,
                fat_g: 17.0,
                saturated_fat_g: 5.5,
                sodium_mg: 540.0,
            }),
        Recipe::new(5, "Greek Yogurt Parfait with Berries", CoreNutrients::new(22.0, 6.0, 280.0))
            .with_image(image("photo-1618798513386-fedeb5c30d39"))
            .with_prep_time(5)
            .with_servings(1)
            .with_likes(1567)
            .with_tags(["High Protein", "Snack", "No Cook", "Breakfast"])
            .with_ingredients(&[
                "200g 0% Greek yogurt",
                "80g mixed berries",
                "1 tbsp chia seeds",
                "15g granola",
            ])
            .with_instructions(&[
                "Spoon half the yogurt into a glass.",
                "Layer with half the berries and chia seeds.",
                "Repeat, then top with granola.",
            ])
            .with_nutrition(NutritionDetail {
                carbs_g: 30.0,
                sugar_g: 16.0,
                fat_g: 5.0,
                saturated_fat_g: 1.0,
                sodium_mg: 90.0,
            }),
        Recipe::new(6, "Lean Turkey & Quinoa Bowl", CoreNutrients::new(40.0, 9.0, 465.0))
            .with_image(image("photo-1693996045300-521e9d08cabc"))
            .with_prep_time(30)
            .with_servings(2)
            .with_likes(1834)
            .with_tags(["High Protein", "High Fibre", "Meal Prep", "GLP-1 Friendly", "Dinner"])
            .with_ingredients(&[
                "300g lean turkey mince",
                "150g cooked quinoa",
                "1 tin black beans, drained",
                "1 red pepper, diced",
                "1 tsp smoked paprika",
                "Handful of coriander",
            ])
            .with_instructions(&[
                "Brown the turkey with the paprika.",
                "Add the pepper and cook for 5 minutes.",
                "Stir through the beans until warm.",
                "Serve over quinoa, finished with coriander.",
            ])
            .with_nutrition(NutritionDetail {
                carbs_g: 42.0,
                sugar_g: 5.0,
                fat_g: 12.0,
                saturated_fat_g: 3.0,
                sodium_mg: 410.0,
            }),
    ]
}
