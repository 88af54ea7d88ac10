//! Built-in color palette shown when the embedding page supplies no list.

use bubbles_core::PaletteEntry;

pub fn default_palette() -> Vec<PaletteEntry> {
    let e = PaletteEntry::new;
    vec![
        // My Helsinki
        e("#A4C8EC", "My Helsinki"),
        e("#FEEB6C", "My Helsinki"),
        e("#CFE4F5", "My Helsinki"),
        e("#00D9B0", "My Helsinki"),
        e("#F59EC3", "My Helsinki"),
        e("#FFC61E", "My Helsinki"),
        e("#009A4B", "My Helsinki"),
        // Navies
        e("#05347E", "Navies"),
        e("#094886", "Navies"),
        e("#1E3653", "Navies"),
        e("#2F5972", "Navies"),
        // iOS Colours
        e("#007AFF", "iOS Colours"),
        e("#FF3B30", "iOS Colours"),
        e("#E5E5EA", "iOS Colours").light(),
        // Tricoroll
        e("#C1C8D1", "Tricoroll"),
        e("#CE0000", "Tricoroll"),
        e("#F8FBFC", "Tricoroll").light(),
        e("#2A68B2", "Tricoroll"),
        // Swedish
        e("#145DA0", "Swedish"),
        e("#F7CD2D", "Swedish"),
        // Christmas wonderland
        e("#027145", "Christmas wonderland"),
        e("#039059", "Christmas wonderland"),
        e("#DD2728", "Christmas wonderland"),
        e("#FCD746", "Christmas wonderland"),
        e("#2779DA", "Christmas wonderland"),
        e("#296EBF", "Christmas wonderland"),
        // Cream and blue
        e("#FEF9EF", "Cream and blue").light(),
        e("#2480F2", "Cream and blue"),
        // Light blues
        e("#4F89B7", "Light blues"),
        e("#A4C8EC", "Light blues"),
        e("#A5C3DE", "Light blues"),
        e("#B5D7FF", "Light blues"),
        e("#CFE4F5", "Light blues"),
        // Dusty blue and nice red
        e("#4F89B7", "Dusty blue and nice red"),
        e("#FEF9EF", "Dusty blue and nice red").light(),
        e("#E10032", "Dusty blue and nice red"),
        // Social media
        e("#2A68B2", "Social media"),
        e("#CE0000", "Social media"),
        e("#FCD746", "Social media"),
        e("#A4C8EC", "Social media"),
        e("#F2F2F2", "Social media").light(),
        // Baby Goods
        e("#d2e8eb", "Baby Goods"),
        e("#f3e4c6", "Baby Goods"),
        e("#e8c99a", "Baby Goods"),
        e("#f7d6d6", "Baby Goods"),
        e("#e4a8aa", "Baby Goods"),
        e("#d0d3d8", "Baby Goods"),
        // Mint green and gray
        e("#d2e8eb", "Mint green and gray"),
        e("#a4d1d7", "Mint green and gray"),
        e("#b8dcd3", "Mint green and gray"),
        e("#c7d8da", "Mint green and gray"),
        e("#d0d3d8", "Mint green and gray"),
        // Icy blues
        e("#c3ddfd", "Icy blues"),
        e("#B2E0ED", "Icy blues"),
        e("#CDE8F2", "Icy blues"),
        e("#B0E0E6", "Icy blues"),
        e("#e0f7fa", "Icy blues").light(),
        e("#A3D5E0", "Icy blues"),
        e("#B6D0E2", "Icy blues"),
        e("#89CFF0", "Icy blues"),
        e("#d6effc", "Icy blues"),
        e("#cfe4f5", "Icy blues"),
        // Miffy
        e("#f26522", "Miffy"),
        e("#ffc80b", "Miffy"),
        e("#00712a", "Miffy"),
        e("#005599", "Miffy"),
        e("#202221", "Miffy"),
        // Scandi table
        e("#da4a3d", "Scandi table"),
        e("#cfe4f5", "Scandi table"),
        e("#f1f1f9", "Scandi table").light(),
        e("#a4d1d7", "Scandi table"),
        e("#a98470", "Scandi table"),
        e("#607cac", "Scandi table"),
        e("#6d6c70", "Scandi table"),
        // My accent colours
        e("#5DA6A7", "My accent colours"),
        e("#4A90E2", "My accent colours"),
        e("#5B7F95", "My accent colours"),
        e("#7EC8E3", "My accent colours"),
        e("#5A7D6D", "My accent colours"),
        e("#e4a8aa", "My accent colours"),
        e("#5C9BD1", "My accent colours"),
        e("#607cac", "My accent colours"),
        e("#90C3D4", "My accent colours"),
        // iOS simple
        e("#ffffff", "iOS simple").described("background").light(),
        e("#F6F6F6", "iOS simple").described("cards, containers").light(),
        e("#E0E0E0", "iOS simple").described("borders"),
        e("#A3A3A3", "iOS simple").described("disabled text"),
        e("#6E6E6E", "iOS simple").described("second text"),
        e("#1A1A1A", "iOS simple").described("main text"),
        e("#007AFF", "iOS simple").described("accent"),
        // Kuusi light theme
        e("#ffffff", "Kuusi light theme").described("background").light(),
        e("#2A3140", "Kuusi light theme").described("main text1"),
        e("#0A4A6E", "Kuusi light theme").described("main text2"),
        e("#f5f5f5", "Kuusi light theme").described("cards, containers").light(),
        e("#A5C3DE", "Kuusi light theme").described("Kuusi light blue"),
        e("#2A68B2", "Kuusi light theme").described("Kuusi blue"),
        e("#5C9BD1", "Kuusi light theme").described("accent"),
        // Kuusi dark theme
        e("#1E2633", "Kuusi dark theme").described("background"),
        e("#2A3140", "Kuusi dark theme").described("cards, containers"),
        e("#DCE2EA", "Kuusi dark theme").described("main text"),
        e("#A5C3DE", "Kuusi light theme").described("Kuusi light blue"),
        e("#2A68B2", "Kuusi light theme").described("Kuusi blue"),
        e("#607cac", "Kuusi dark theme").described("accent"),
    ]
}
