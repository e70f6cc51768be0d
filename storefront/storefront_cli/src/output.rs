use catalog::pricing::PriceDisplay;
use i18n::Language;
use storefront_app::{PartItem, StorefrontViewModel};
use termtree::Tree;

pub fn search(view: &StorefrontViewModel) -> Tree<String> {
    let search = &view.search;
    let mut tree = Tree::new(format!("{} - {}", search.title, search.records_found));

    if let Some(empty_state) = &search.empty_state {
        tree.leaves
            .push(Tree::new(empty_state.message.clone()));
        tree.leaves
            .push(Tree::new(empty_state.clear_filters_label.clone()));
        return tree;
    }

    for part in search.parts.iter() {
        tree.leaves
            .push(part_node(view.language, part, &search.request_quote_label));
    }

    tree
}

fn part_node(language: Language, part: &PartItem, request_quote_label: &str) -> Tree<String> {
    let mut node = Tree::new(part.mpn.clone());

    let price = match &part.price {
        PriceDisplay::RequestQuote => request_quote_label.to_string(),
        PriceDisplay::Tiers(tiers) => tiers
            .iter()
            .map(|tier| format!("{}+ {} {}", tier.min_qty, tier.price, part.currency))
            .collect::<Vec<_>>()
            .join(", "),
    };

    let fields = [
        ("manufacturer", part.manufacturer.clone()),
        ("col-desc", part.description.clone()),
        ("col-stock", format!("{} ({})", part.stock, part.status)),
        ("col-price", price),
    ];

    for (key, value) in fields {
        node.leaves
            .push(Tree::new(format!("{}: {}", i18n::tr(language, key), value)));
    }

    node
}

pub fn manufacturers(language: Language, view: &StorefrontViewModel) -> Tree<String> {
    Tree::new(i18n::tr(language, "manufacturer")).with_leaves(
        view.search
            .manufacturers
            .iter()
            .map(|item| Tree::new(item.manufacturer.clone())),
    )
}

pub fn chat(view: &StorefrontViewModel) -> Tree<String> {
    Tree::new(view.chat.agent_name.clone()).with_leaves(
        view.chat
            .messages
            .iter()
            .map(|message| Tree::new(format!("[{}] {}", message.sender, message.text))),
    )
}
