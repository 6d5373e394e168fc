use crate::{
    llm::ArticleGenerator,
    yt::{DurationLookup, EmbedLookup, TranscriptSource},
    VideoPipeline,
};

pub struct VideoPipelineBuilder<D = (), E = (), T = (), G = ()> {
    duration_lookup: D,
    embed_lookup: E,
    transcript_source: T,
    generator: G,
}

impl VideoPipelineBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            duration_lookup: (),
            embed_lookup: (),
            transcript_source: (),
            generator: (),
        }
    }
}

impl<D, E, T, G> VideoPipelineBuilder<D, E, T, G> {
    pub fn duration_lookup<D2: DurationLookup + Send + Sync + 'static>(
        self,
        duration_lookup: D2,
    ) -> VideoPipelineBuilder<D2, E, T, G> {
        VideoPipelineBuilder {
            duration_lookup,
            embed_lookup: self.embed_lookup,
            transcript_source: self.transcript_source,
            generator: self.generator,
        }
    }

    pub fn embed_lookup<E2: EmbedLookup + Send + Sync + 'static>(
        self,
        embed_lookup: E2,
    ) -> VideoPipelineBuilder<D, E2, T, G> {
        VideoPipelineBuilder {
            duration_lookup: self.duration_lookup,
            embed_lookup,
            transcript_source: self.transcript_source,
            generator: self.generator,
        }
    }

    pub fn transcript_source<T2: TranscriptSource + Send + Sync + 'static>(
        self,
        transcript_source: T2,
    ) -> VideoPipelineBuilder<D, E, T2, G> {
        VideoPipelineBuilder {
            duration_lookup: self.duration_lookup,
            embed_lookup: self.embed_lookup,
            transcript_source,
            generator: self.generator,
        }
    }

    pub fn generator<G2: ArticleGenerator + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> VideoPipelineBuilder<D, E, T, G2> {
        VideoPipelineBuilder {
            duration_lookup: self.duration_lookup,
            embed_lookup: self.embed_lookup,
            transcript_source: self.transcript_source,
            generator,
        }
    }
}

impl<D, E, T, G> VideoPipelineBuilder<D, E, T, G>
where
    D: DurationLookup + Send + Sync + 'static,
    E: EmbedLookup + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: ArticleGenerator + Send + Sync + 'static,
{
    pub fn build(self) -> VideoPipeline<D, E, T, G> {
        VideoPipeline {
            duration_lookup: self.duration_lookup,
            embed_lookup: self.embed_lookup,
            transcript_source: self.transcript_source,
            generator: self.generator,
        }
    }
}
