//! Static page copy: title, tab labels, about text, care tips and photos.

pub const TITLE: &str = "All About Cats";

pub const FACT_TITLE: &str = "Did You Know?";
pub const FACT_BUTTON: &str = "Get Another Fact";

pub const BREEDS_TITLE: &str = "Popular Cat Breeds";
pub const CARE_TITLE: &str = "Cat Care Tips";

pub const ABOUT: &str = "Cats are fascinating creatures that have been domesticated for thousands of years. \
They are known for their independence, agility, and affectionate nature. Cats come in various breeds, \
each with its unique characteristics and personalities. These graceful animals have captured the hearts \
of millions around the world with their playful antics and soothing purrs.";

pub const CARE_TIPS: [&str; 7] = [
    "Provide a balanced diet suitable for your cat's age and health condition",
    "Ensure fresh water is always available",
    "Regular grooming to keep their coat healthy",
    "Schedule regular check-ups with a veterinarian",
    "Provide mental stimulation with toys and play sessions",
    "Create a safe and comfortable living environment",
    "Maintain a clean litter box",
];

/// Photos shown in the carousel, in display order.
pub const CAT_IMAGES: [&str; 3] = [
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bb/Kittyply_edit1.jpg/1200px-Kittyply_edit1.jpg",
];

/// Alt text for a carousel slide (1-based, like the photo captions).
pub fn image_alt(index: usize) -> String {
    format!("Cat {}", index + 1)
}
