use crate::prompt::StyleTag;

/// Starter prompts shown by `examples`, straight from the Ver 3.0 page.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "未来都市の夜景、ネオンライト",
    "森の中の小さな家、ファンタジー風",
    "宇宙飛行士が月面を歩く、リアル",
    "カラフルな花畑、油絵風",
];

pub fn help() {
    println!("Type a description to generate an image from it. Commands:");
    println!("  help            show this text");
    println!("  examples        show example prompts");
    println!("  style           show the current style and the available tags");
    println!("  style <tag>     select a style woven into every prompt");
    println!("  gallery         list this session's generations, newest first");
    println!("  save <n>        write gallery item n to the output directory");
    println!("  quit            exit (the gallery is not kept)");
}

pub fn examples() {
    println!("Example prompts:");
    for prompt in EXAMPLE_PROMPTS {
        println!("  {prompt}");
    }
}

/// `style` with no argument: show current selection and the full tag list.
pub fn styles(current: StyleTag) {
    println!("Current style: {current}");
    println!("Available styles:");
    for tag in StyleTag::ALL {
        match tag.phrase() {
            Some(phrase) => println!("  {tag} ({phrase})"),
            None => println!("  {tag}"),
        }
    }
}
