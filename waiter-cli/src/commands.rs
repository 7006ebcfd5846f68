//! Subcommand handlers

use anyhow::{Context, bail};
use waiter_client::composer::MenuItem;
use waiter_client::{
    HttpClient, MenuProvider, OrderComposer, OrderService, StatusBoard, TableProvider, User,
    WaiterApi,
};

use crate::config::{Command, LoginArgs, OrderArgs, StatusArgs};
use crate::item_spec::ItemSpec;
use crate::render;

pub async fn run<H: HttpClient>(command: Command, api: WaiterApi<H>) -> anyhow::Result<()> {
    match command {
        Command::Entities => entities(&api).await,
        Command::Login(args) => login(&api, args).await,
        Command::Logout => {
            api.logout().await?;
            println!("Logged out");
            Ok(())
        }
        Command::Menu => {
            let user = require_user(&api).await?;
            let mut composer = OrderComposer::new(api);
            composer.set_identity(Some(user)).await?;
            print!("{}", render::render_menu(composer.catalog()));
            Ok(())
        }
        Command::Tables => {
            let user = require_user(&api).await?;
            let mut composer = OrderComposer::new(api);
            composer.set_identity(Some(user)).await?;
            print!("{}", render::render_tables(composer.tables()));
            Ok(())
        }
        Command::Order(args) => order(api, args).await,
        Command::Status(args) => status(api, args).await,
    }
}

async fn require_user<H: HttpClient>(api: &WaiterApi<H>) -> anyhow::Result<User> {
    match api.current_user().await {
        Some(user) => Ok(user),
        None => bail!("Not logged in. Run `waiter login` first."),
    }
}

async fn entities<H: HttpClient>(api: &WaiterApi<H>) -> anyhow::Result<()> {
    let entities = api.entities().await.context("Failed to fetch entities")?;
    for entity in entities {
        println!("{}  <{}>", entity.name, entity.id);
    }
    Ok(())
}

async fn login<H: HttpClient>(api: &WaiterApi<H>, args: LoginArgs) -> anyhow::Result<()> {
    let entity_id = match args.entity {
        Some(id) => id,
        None => {
            let entities = api.entities().await.context("Failed to fetch entities")?;
            match entities.into_iter().next() {
                Some(entity) => entity.id,
                None => bail!("No entity available to log into"),
            }
        }
    };

    let user = api.login(&args.username, &args.password, &entity_id).await?;
    println!(
        "Logged in as {} ({:?}) at {}",
        user.username,
        user.role,
        user.entity.as_deref().unwrap_or(&entity_id)
    );
    Ok(())
}

/// Match an id first, then a case-insensitive name
fn find_item<'a>(items: &'a [MenuItem], key: &str) -> Option<&'a MenuItem> {
    items
        .iter()
        .find(|i| i.id == key)
        .or_else(|| items.iter().find(|i| i.name.eq_ignore_ascii_case(key)))
}

/// One requested menu line, resolved to ids
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderLine {
    item_id: String,
    quantity: u32,
    options: Vec<(String, u32)>,
}

/// Resolve `--item` specs against the menu
///
/// Specs naming the same item (or the same option of an item) are merged
/// and their quantities added, keeping first-appearance order.
fn resolve_items(items: &[MenuItem], specs: &[ItemSpec]) -> anyhow::Result<Vec<OrderLine>> {
    let mut lines: Vec<OrderLine> = Vec::new();
    for spec in specs {
        let item = find_item(items, &spec.food)
            .with_context(|| format!("No menu item '{}'", spec.food))?;

        let index = match lines.iter().position(|l| l.item_id == item.id) {
            Some(index) => {
                lines[index].quantity = lines[index].quantity.saturating_add(spec.quantity);
                index
            }
            None => {
                lines.push(OrderLine {
                    item_id: item.id.clone(),
                    quantity: spec.quantity,
                    options: Vec::new(),
                });
                lines.len() - 1
            }
        };

        for wanted in &spec.options {
            let option = item
                .options
                .iter()
                .find(|o| o.id == wanted.option || o.name.eq_ignore_ascii_case(&wanted.option))
                .with_context(|| format!("'{}' has no option '{}'", item.name, wanted.option))?;
            let options = &mut lines[index].options;
            match options.iter_mut().find(|(id, _)| *id == option.id) {
                Some((_, quantity)) => *quantity = quantity.saturating_add(wanted.quantity),
                None => options.push((option.id.clone(), wanted.quantity)),
            }
        }
    }
    Ok(lines)
}

/// Select every line and set its quantities to the requested values
fn apply_lines<B>(composer: &mut OrderComposer<B>, lines: &[OrderLine])
where
    B: MenuProvider + TableProvider + OrderService,
{
    for line in lines {
        let Some(item) = composer.catalog().item(&line.item_id) else {
            continue;
        };
        let (selected, current) = (item.selected, item.quantity);
        if !selected {
            composer.toggle_item_selection(&line.item_id);
        }
        composer.change_item_quantity(&line.item_id, delta_to(current, line.quantity));

        for (option_id, quantity) in &line.options {
            let Some(option) = composer
                .catalog()
                .item(&line.item_id)
                .and_then(|i| i.options.iter().find(|o| o.id == *option_id))
            else {
                continue;
            };
            let (selected, current) = (option.selected, option.quantity);
            if !selected {
                composer.toggle_option_selection(&line.item_id, option_id);
            }
            composer.change_option_quantity(&line.item_id, option_id, delta_to(current, *quantity));
        }
    }
}

/// Delta that takes `current` to `target`
fn delta_to(current: u32, target: u32) -> i32 {
    let delta = i64::from(target) - i64::from(current);
    delta.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

async fn order<H: HttpClient>(api: WaiterApi<H>, args: OrderArgs) -> anyhow::Result<()> {
    let user = require_user(&api).await?;
    let mut composer = OrderComposer::new(api);
    composer.set_identity(Some(user)).await?;

    if let Some(table) = &args.table {
        let table_id = composer
            .tables()
            .iter()
            .find(|t| t.id == *table || t.number.to_string() == *table)
            .map(|t| t.id.clone())
            .with_context(|| format!("No table '{}'", table))?;
        composer.set_selected_table(table_id);
    }

    let lines = resolve_items(composer.catalog().items(), &args.items)?;
    apply_lines(&mut composer, &lines);
    composer.set_remark(args.remark);

    print!("{}", render::render_menu(composer.catalog()));
    println!("Total: {}", render::format_rupiah(composer.total()));

    if args.dry_run {
        return Ok(());
    }

    composer.submit_order().await?;
    if let Some(text) = composer.notice().text() {
        println!("{}", text);
    }
    Ok(())
}

async fn status<H: HttpClient>(api: WaiterApi<H>, args: StatusArgs) -> anyhow::Result<()> {
    let user = require_user(&api).await?;
    let mut board = StatusBoard::new(api, user.entity_id);
    board.refresh().await?;

    if let Some(order_id) = &args.expand {
        board.toggle_expanded(order_id);
    }

    if board.orders().is_empty() {
        println!("No active orders");
        return Ok(());
    }
    let groups = board.grouped_by_table();
    print!("{}", render::render_status(&groups, |id| board.is_expanded(id)));
    Ok(())
}
