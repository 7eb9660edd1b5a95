use tt_core::{Color, Rule, Scene, Story, StoryMeta, Target};

/// A two-scene story around a bagel, a coin, and conor.
pub fn bagel_story() -> Story {
    let mut meta = StoryMeta::new("Bagel", "front");
    meta.initial_flags = vec!["DEFAULT".into(), "BAGEL_PRESENT".into()];
    meta.intro = "conor wants a bagel.".into();

    let mut story = Story::new(meta);
    story.add_scene(Scene::new("front", "A cafe terrace. A bagel sits on a table."));
    story.add_scene(Scene::new("counter", "Inside the cafe."));

    story.add_target(Target::new("bagel", Color::Brown));
    story.add_target(Target::new("coin", Color::Yellow));
    story.add_target(Target::new("conor", Color::LightPurple));
    story.add_target(Target::new("cafe", Color::Cream));

    story.add_scene_target("front", "bagel", "BAGEL_PRESENT");
    story.add_scene_target("front", "coin", "NOT_HAS_COIN");
    story.add_scene_target("front", "conor", "DEFAULT");
    story.add_scene_target("front", "cafe", "DEFAULT");
    story.add_scene_target("counter", "cafe", "DEFAULT");

    story.add_scene_action("front", "take", "DEFAULT");
    story.add_scene_action("front", "look", "DEFAULT");
    story.add_scene_action("front", "enter", "HAS_BAGEL,HAS_COIN");
    story.add_scene_action("counter", "leave", "DEFAULT");

    story.add_rule(
        Rule::new("front", "take", "bagel", "BAGEL_PRESENT", "You take the bagel.")
            .with_clear("BAGEL_PRESENT"),
    );
    story.add_rule(Rule::new("front", "look", "conor", "DEFAULT", "conor is reading."));
    story.add_rule(Rule::new("front", "look", "conor", "DEFAULT", "Never shown."));
    story.add_rule(
        Rule::new("front", "take", "coin", "NOT_HAS_COIN", "You take the coin.")
            .with_clear("NOT_HAS_COIN")
            .with_set("HAS_COIN"),
    );
    story.add_rule(
        Rule::new("front", "enter", "cafe", "HAS_COIN", "You enter the cafe.")
            .with_new_scene("counter"),
    );
    story.add_rule(
        Rule::new("counter", "leave", "cafe", "DEFAULT", "You leave the cafe.")
            .with_new_scene("front"),
    );
    story
}
