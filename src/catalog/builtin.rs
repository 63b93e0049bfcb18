//! Built-in review set

use crate::types::{GalleryImage, WalletRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn shot(src: &str, alt: &str, description: &str) -> GalleryImage {
    GalleryImage {
        src: src.to_string(),
        alt: alt.to_string(),
        description: Some(description.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn wallet(
    name: &str,
    onboarding: u8,
    ui_design: u8,
    ux_issues: u32,
    notes: &str,
    good: &[&str],
    issues: &[&str],
    features: &[&str],
) -> WalletRecord {
    WalletRecord {
        name: name.to_string(),
        onboarding,
        ui_design,
        ux_issues,
        notes: notes.to_string(),
        good: strings(good),
        ux_issues_list: strings(issues),
        unique_features: strings(features),
        icon: format!("/icons/{}.png", name.to_lowercase().replace(' ', "-")),
        screenshots: Vec::new(),
    }
}

/// Wallets in canonical display order
pub fn wallets() -> Vec<WalletRecord> {
    let mut inch = wallet(
        "1inch",
        4,
        4,
        4,
        "Powerful swap-first wallet whose home screen tries to do too much at once.",
        &[
            "Fast wallet creation with clear seed phrase backup",
            "Swap flow is best in class",
            "Consistent dark visual language",
        ],
        &[
            "Stories section on the home screen is overwhelming",
            "Fee jargon on the send screen",
            "Ether balance not tracked on the token screen",
            "Receive screen lacks guidance for beginners",
        ],
        &["Built-in 1inch swap aggregation", "Stories feed", "Multi-chain portfolio"],
    );
    inch.screenshots = vec![
        shot(
            "/screenshots/1inch-home.png",
            "1inch wallet home screen",
            "Home screen with 'Stories' section that is overwhelming with too many uninteresting shorts inside.",
        ),
        shot(
            "/screenshots/1inch-send.png",
            "1inch wallet send screen",
            "Send transaction screen with jargon that could be easily removed by using simpler terms like 'Transaction Fee'.",
        ),
        shot(
            "/screenshots/1inch-token.png",
            "1inch wallet token details",
            "Token details screen showing Ether not being tracked, which doesn't seem right.",
        ),
        shot(
            "/screenshots/1inch-receive.png",
            "1inch wallet receive screen",
            "Receive screen missing description & guidance for beginners, especially for those not used to QR codes.",
        ),
        shot(
            "/screenshots/1inch-success.png",
            "1inch wallet success screen",
            "Success screen where only 'Congratulations' should be bold for better visual hierarchy.",
        ),
    ];

    vec![
        wallet(
            "MetaMask",
            3,
            3,
            6,
            "The default browser wallet. Familiar to many, but dense for newcomers.",
            &["Widely supported by dapps", "Clear network switcher"],
            &[
                "Seed phrase step is intimidating",
                "Gas settings exposed too early",
                "Account naming is buried in menus",
                "Token import requires contract addresses",
                "Inconsistent modal styles",
                "Error messages are technical",
            ],
            &["Snaps extension system", "Portfolio dashboard"],
        ),
        inch,
        wallet(
            "Rainbow",
            5,
            5,
            1,
            "Playful, polished and friendly. Sets the bar for onboarding.",
            &[
                "Onboarding explains every step",
                "Delightful animations without slowing tasks down",
                "ENS names shown everywhere",
            ],
            &["Hidden advanced settings are hard to find"],
            &["Curated NFT gallery", "Points program"],
        ),
        wallet(
            "Trust Wallet",
            4,
            3,
            3,
            "Broad chain coverage with a utilitarian interface.",
            &["Supports a huge number of chains", "Simple send and receive"],
            &[
                "Crowded token list",
                "Staking screens use inconsistent terminology",
                "Browser tab is easy to miss",
            ],
            &["Built-in dapp browser", "Native staking"],
        ),
        wallet(
            "Phantom",
            5,
            4,
            2,
            "Started on Solana, now multi-chain, keeps a clean and calm layout.",
            &["Readable transaction previews", "Spam NFTs filtered by default"],
            &["Chain switching is implicit", "Swap quotes refresh without notice"],
            &["Transaction simulation", "Multi-chain support"],
        ),
        wallet(
            "Coinbase Wallet",
            4,
            4,
            4,
            "Approachable for exchange users, but mixes exchange and self-custody concepts.",
            &["Username based transfers", "Helpful empty states"],
            &[
                "Confusion between exchange and wallet balances",
                "Too many promotional banners",
                "Recovery options buried",
                "Dapp connection prompts are vague",
            ],
            &["Coinbase account linking", "Smart wallet passkeys"],
        ),
        wallet(
            "Zerion",
            4,
            5,
            0,
            "Portfolio-first wallet with excellent information design.",
            &["Clear portfolio breakdown", "Consistent typography", "Readable history"],
            &[],
            &["DeFi position tracking"],
        ),
    ]
}
