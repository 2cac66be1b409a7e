//! Article listing and detail pages.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, NavigateOptions, A};
use newmeclass::flows::articles::{
    categories, load_article, load_published, related, ArticleFilter, ALL_CATEGORIES, ARTICLES_ROUTE,
};
use newmeclass::models::Article;

use crate::services::GlooBackend;

fn article_card(article: &Article, config: &newmeclass::Config) -> impl IntoView {
    let image = article.featured_image.as_deref().map(|i| config.asset_url(i));
    let category = article.category.clone();
    let title = article.title.clone();
    let excerpt = article.excerpt.clone().unwrap_or_default();
    let published = article.published_label();
    view! {
        <A href=format!("/articles/{}", article.id) class="card article-card">
            {image.map(|src| view! { <img class="article-image" src=src alt=""/> })}
            <span class="article-category">{category}</span>
            <h3>{title}</h3>
            <p class="muted">{excerpt}</p>
            <span class="article-date">{published}</span>
        </A>
    }
}

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let backend = GlooBackend::default();
    let config = backend.config().clone();
    let articles = create_rw_signal(None::<Vec<Article>>);
    let filter = create_rw_signal(ArticleFilter::default());
    let (failed, set_failed) = create_signal(false);

    spawn_local(async move {
        match load_published(&backend).await {
            Ok(list) => {
                articles.try_set(Some(list));
            }
            Err(e) => {
                log::error!("Failed to load articles: {}", e);
                articles.try_set(Some(Vec::new()));
                set_failed.try_set(true);
            }
        }
    });

    let category_buttons = move || {
        articles.with(|list| {
            categories(list.as_deref().unwrap_or_default())
                .into_iter()
                .map(|category| {
                    let label = if category == ALL_CATEGORIES { "Semua".to_string() } else { category.clone() };
                    let active = category.clone();
                    view! {
                        <button
                            class="category-button"
                            class:active=move || filter.with(|f| f.category == active)
                            on:click=move |_| filter.update(|f| f.category = category.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="container page articles-page">
            <h1>"Artikel"</h1>
            <input
                type="search"
                class="search-input"
                placeholder="Cari artikel..."
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
            />
            <div class="category-list">{category_buttons}</div>
            {move || failed.get().then(|| view! {
                <div class="error-message">"Gagal memuat artikel."</div>
            })}
            {move || {
                let config = config.clone();
                articles.with(|list| match list {
                    None => view! { <div class="loading">"Memuat artikel..."</div> }.into_view(),
                    Some(list) => {
                        let shown = filter.with(|f| f.apply(list).into_iter().map(|a| article_card(a, &config).into_view()).collect_view());
                        view! { <div class="card-grid">{shown}</div> }.into_view()
                    }
                })
            }}
        </div>
    }
}

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = store_value(use_navigate());
    let backend = GlooBackend::default();
    let config = backend.config().clone();
    let detail = create_rw_signal(None::<(Article, Vec<Article>)>);

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        let backend = backend.clone();
        spawn_local(async move {
            let (article, all) = futures::join!(load_article(&backend, &id), load_published(&backend));
            match article {
                Some(article) => {
                    let all = all.unwrap_or_default();
                    let related = related(&all, &article).into_iter().cloned().collect();
                    detail.try_set(Some((article, related)));
                }
                None => navigate.with_value(|nav| nav(ARTICLES_ROUTE, NavigateOptions::default())),
            }
        });
    });

    view! {
        <div class="container page article-detail">
            {move || {
                let config = config.clone();
                detail.with(|d| match d {
                    None => view! { <div class="loading">"Memuat artikel..."</div> }.into_view(),
                    Some((article, related)) => view! {
                        <A href=ARTICLES_ROUTE class="back-link">"← Kembali ke Artikel"</A>
                        <span class="article-category">{article.category.clone()}</span>
                        <h1>{article.title.clone()}</h1>
                        <div class="article-meta">
                            {article.author.clone()} " • " {article.published_label()}
                        </div>
                        {article.featured_image.as_deref().map(|i| view! {
                            <img class="article-hero" src=config.asset_url(i) alt=""/>
                        })}
                        <div class="article-content" inner_html=article.content.clone()></div>
                        <div class="article-tags">
                            {article.tags.iter().map(|t| view! { <span class="tag">"#" {t.clone()}</span> }).collect_view()}
                        </div>
                        {(!related.is_empty()).then(|| view! {
                            <h2>"Artikel Terkait"</h2>
                            <div class="card-grid">
                                {related.iter().map(|a| article_card(a, &config).into_view()).collect_view()}
                            </div>
                        })}
                    }
                    .into_view(),
                })
            }}
        </div>
    }
}
